//! Generic argument parsing and dispatch for the `ankiconn` binary.
//!
//! The CLI has no per-action argument declarations. Tokens are split into
//! flags and positionals; the first positional names the action; flags
//! become the action's single params mapping. Which flags are valid is
//! decided by AnkiConnect, not here, so unknown flags pass through
//! untouched. The action catalog supplies the one thing checked locally:
//! that the number of packaged arguments (0 or 1) matches what the action
//! requires.
//!
//! Flags whose key starts with `with_` are not arguments but post-action
//! modifiers: they run in the order given, strictly after the primary
//! action succeeds. The one built-in modifier is `sync`.

use std::io::{self, Write};

use ankiconn::catalog::{ActionTable, GROUPS};
use ankiconn::{AnkiClient, Outcome, casing};
use serde_json::{Map, Value};
use tracing::debug;

use crate::render;

/// Exit code for usage problems: unknown action or arity mismatch.
pub const EXIT_USAGE: u8 = 1;

/// Exit code for transport or remote failures.
pub const EXIT_REMOTE: u8 = 2;

/// A parsed command line: the action token, its flag arguments, and any
/// post-action modifiers, all in the crate's underscore convention.
#[derive(Debug, Default, PartialEq)]
pub struct Invocation {
    /// The first positional token, if any.
    pub action: Option<String>,
    /// Flag arguments in the order given; merged last-wins at dispatch.
    pub flags: Vec<(String, Value)>,
    /// Modifier names (without the `with_` prefix), in the order given.
    pub modifiers: Vec<String>,
}

/// Split raw tokens into an [`Invocation`].
///
/// Both `--key=value` and `--key value` forms are accepted; a flag with no
/// value is `true`. Flag keys are normalized with [`casing::decode_key`], so
/// `--cardsToo=false` and `--cards_too=false` are the same flag. Values are
/// opportunistically parsed as JSON (object keys inside get the same
/// normalization) and fall back to the verbatim string when that fails,
/// which is what makes both `--deck=MyDeck` and
/// `--note='{"deck_name":"X"}'` work without per-flag declarations.
pub fn parse(tokens: &[String]) -> Invocation {
    let mut invocation = Invocation::default();
    let mut positionals = Vec::new();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        let Some(flag) = token.strip_prefix("--") else {
            positionals.push(token.clone());
            continue;
        };
        let (key, raw) = match flag.split_once('=') {
            Some((key, value)) => (key, Some(value.to_string())),
            None => {
                let value = iter.next_if(|next| !next.starts_with("--")).cloned();
                (flag, value)
            }
        };
        let key = casing::decode_key(key);
        match key.strip_prefix("with_") {
            Some(modifier) => invocation.modifiers.push(modifier.to_string()),
            None => invocation.flags.push((key, decode_flag_value(raw))),
        }
    }

    if positionals.len() > 1 {
        debug!(extra = ?&positionals[1..], "ignoring extra positional tokens");
    }
    invocation.action = positionals.into_iter().next();
    invocation
}

fn decode_flag_value(raw: Option<String>) -> Value {
    match raw {
        None => Value::Bool(true),
        Some(text) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => casing::decode_keys(parsed),
            Err(_) => Value::String(text),
        },
    }
}

/// Merge flags into the action's single params mapping, last-wins.
fn package(flags: Vec<(String, Value)>) -> Option<Map<String, Value>> {
    if flags.is_empty() {
        return None;
    }
    let mut params = Map::new();
    for (key, value) in flags {
        params.insert(key, value);
    }
    Some(params)
}

/// Parse tokens, dispatch the action, render the outcome, and run any
/// modifiers. Returns the process exit code.
///
/// Every path writes exactly one line or block to `out`; nothing is
/// swallowed.
pub async fn run<W: Write>(
    client: &AnkiClient,
    table: &ActionTable,
    tokens: &[String],
    out: &mut W,
) -> io::Result<u8> {
    let Invocation { action, flags, modifiers } = parse(tokens);

    let action = match action.as_deref() {
        None | Some("help") => {
            write_usage(out)?;
            return Ok(0);
        }
        Some(action) => action,
    };

    let Some(def) = table.get(action) else {
        writeln!(
            out,
            "'{}' is not a valid action. Run 'ankiconn help' for the list of actions.",
            action
        )?;
        return Ok(EXIT_USAGE);
    };

    let params = package(flags);
    let provided = params.is_some() as u8;
    if provided != def.arity {
        writeln!(
            out,
            "'{}' expects {} argument{}, got {}.",
            action,
            def.arity,
            if def.arity == 1 { "" } else { "s" },
            provided
        )?;
        return Ok(EXIT_USAGE);
    }

    debug!(action, modifiers = ?modifiers, "dispatching");
    let mut code = match client.call(action, params.map(Value::Object)).await {
        Ok(Outcome::Success(value)) => {
            writeln!(out, "{}", render::success(&value))?;
            0
        }
        Ok(Outcome::Failure(reason)) => {
            writeln!(out, "{}", render::failure(&reason))?;
            EXIT_REMOTE
        }
        Err(error) => {
            writeln!(out, "Error: {}", error)?;
            EXIT_REMOTE
        }
    };

    if code == 0 {
        for modifier in &modifiers {
            match modifier.as_str() {
                "sync" => {
                    writeln!(out, "Syncing...")?;
                    match client.call("sync", None).await {
                        Ok(Outcome::Success(_)) => writeln!(out, "Synced!")?,
                        Ok(Outcome::Failure(reason)) => {
                            writeln!(out, "{}", render::failure(&reason))?;
                            code = EXIT_REMOTE;
                        }
                        Err(error) => {
                            writeln!(out, "Error: {}", error)?;
                            code = EXIT_REMOTE;
                        }
                    }
                }
                unknown => {
                    writeln!(out, "Warning: unknown modifier --with_{}.", unknown)?;
                }
            }
        }
    }

    Ok(code)
}

/// Print the usage text with the full action list, grouped by domain.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Usage: ankiconn [OPTIONS] <action> [--flag=value ...] [--with_<modifier> ...]"
    )?;
    writeln!(out)?;
    writeln!(out, "Flag values may be plain strings or JSON, e.g. --deck=Japanese or")?;
    writeln!(out, "--decks='[\"Japanese\"]'. Append --with_sync to sync the collection")?;
    writeln!(out, "after a successful action.")?;
    writeln!(out)?;
    writeln!(out, "Actions:")?;
    for group in GROUPS {
        writeln!(out, "  {}:", group.name)?;
        for line in wrap(group.actions.iter().map(|def| def.name), 72) {
            writeln!(out, "    {}", line)?;
        }
    }
    Ok(())
}

fn wrap<'a>(names: impl Iterator<Item = &'a str>, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for name in names {
        match lines.last_mut() {
            Some(line) if line.len() + name.len() + 2 <= width => {
                line.push_str("  ");
                line.push_str(name);
            }
            _ => lines.push(name.to_string()),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn first_positional_is_the_action() {
        let invocation = parse(&tokens(&["create_deck", "--deck=TEST DECK"]));
        assert_eq!(invocation.action.as_deref(), Some("create_deck"));
        assert_eq!(invocation.flags, vec![("deck".to_string(), json!("TEST DECK"))]);
        assert!(invocation.modifiers.is_empty());
    }

    #[test]
    fn no_tokens_means_no_action() {
        assert_eq!(parse(&[]).action, None);
    }

    #[test]
    fn space_separated_flag_values_are_accepted() {
        let invocation = parse(&tokens(&["create_deck", "--deck", "Japanese"]));
        assert_eq!(invocation.flags, vec![("deck".to_string(), json!("Japanese"))]);
    }

    #[test]
    fn bare_flags_are_true() {
        let invocation = parse(&tokens(&["delete_decks", "--cards_too", "--decks=[\"X\"]"]));
        assert_eq!(
            invocation.flags,
            vec![
                ("cards_too".to_string(), json!(true)),
                ("decks".to_string(), json!(["X"])),
            ]
        );
    }

    #[test]
    fn flag_keys_are_normalized() {
        let invocation = parse(&tokens(&["delete_decks", "--cardsToo=true"]));
        assert_eq!(invocation.flags, vec![("cards_too".to_string(), json!(true))]);
    }

    #[test]
    fn json_values_are_parsed_and_keys_decoded() {
        let invocation = parse(&tokens(&["add_note", r#"--note={"deckName":"X","fields":{"Front":"hi"}}"#]));
        assert_eq!(
            invocation.flags,
            vec![(
                "note".to_string(),
                json!({ "deck_name": "X", "fields": { "Front": "hi" } })
            )]
        );
    }

    #[test]
    fn malformed_json_falls_back_to_the_raw_string() {
        let invocation = parse(&tokens(&["create_deck", "--deck=TEST DECK"]));
        assert_eq!(invocation.flags[0].1, json!("TEST DECK"));
    }

    #[test]
    fn modifiers_are_extracted_in_order() {
        let invocation = parse(&tokens(&["sync", "--with_reload", "--deck=X", "--with_sync"]));
        assert_eq!(invocation.modifiers, vec!["reload", "sync"]);
        assert_eq!(invocation.flags.len(), 1);
    }

    #[test]
    fn flags_may_precede_the_action() {
        let invocation = parse(&tokens(&["--deck=X", "create_deck"]));
        assert_eq!(invocation.action.as_deref(), Some("create_deck"));
        assert_eq!(invocation.flags.len(), 1);
    }

    #[test]
    fn packaging_merges_last_wins() {
        let packaged = package(vec![
            ("deck".to_string(), json!("first")),
            ("deck".to_string(), json!("second")),
        ])
        .unwrap();
        assert_eq!(packaged.get("deck"), Some(&json!("second")));
    }

    #[test]
    fn packaging_zero_flags_is_no_argument() {
        assert_eq!(package(Vec::new()), None);
    }

    #[test]
    fn usage_lists_every_group() {
        let mut out = Vec::new();
        write_usage(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for group in GROUPS {
            assert!(text.contains(group.name), "usage is missing group {}", group.name);
        }
        assert!(text.contains("create_deck"));
    }
}
