//! The static catalog of AnkiConnect actions.
//!
//! Every action the CLI can dispatch is declared here once, under its
//! underscore name, together with the number of arguments it requires: `0`
//! for actions that take no params object, `1` for actions that take exactly
//! one. Wire names are never stored; they are derived through
//! [`crate::casing::encode_key`] at request time.
//!
//! The catalog is declared data, not reflection: [`ActionTable`] is built
//! from these slices once at process start and is immutable afterwards.

use std::collections::HashMap;

/// A single dispatchable action: underscore name plus required argument
/// count (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDef {
    /// The underscore-form action name.
    pub name: &'static str,
    /// How many packaged arguments the action requires.
    pub arity: u8,
}

const fn action(name: &'static str, arity: u8) -> ActionDef {
    ActionDef { name, arity }
}

/// A named group of actions, used for usage text.
#[derive(Debug, Clone, Copy)]
pub struct ActionGroup {
    /// Display name of the group.
    pub name: &'static str,
    /// The group's actions.
    pub actions: &'static [ActionDef],
}

const DECK_ACTIONS: &[ActionDef] = &[
    action("deck_names", 0),
    action("deck_names_and_ids", 0),
    action("get_decks", 1),
    action("create_deck", 1),
    action("change_deck", 1),
    action("delete_decks", 1),
    action("get_deck_config", 1),
    action("save_deck_config", 1),
    action("set_deck_config_id", 1),
    action("clone_deck_config_id", 1),
    action("remove_deck_config_id", 1),
    action("get_deck_stats", 1),
];

const NOTE_ACTIONS: &[ActionDef] = &[
    action("add_note", 1),
    action("add_notes", 1),
    action("can_add_notes", 1),
    action("can_add_notes_with_error_detail", 1),
    action("update_note_fields", 1),
    action("update_note", 1),
    action("update_note_model", 1),
    action("update_note_tags", 1),
    action("get_note_tags", 1),
    action("add_tags", 1),
    action("remove_tags", 1),
    action("get_tags", 0),
    action("clear_unused_tags", 0),
    action("replace_tags", 1),
    action("replace_tags_in_all_notes", 1),
    action("find_notes", 1),
    action("notes_info", 1),
    action("notes_mod_time", 1),
    action("delete_notes", 1),
    action("remove_empty_notes", 0),
];

const CARD_ACTIONS: &[ActionDef] = &[
    action("find_cards", 1),
    action("cards_info", 1),
    action("cards_mod_time", 1),
    action("cards_to_notes", 1),
    action("suspend", 1),
    action("unsuspend", 1),
    action("suspended", 1),
    action("are_suspended", 1),
    action("are_due", 1),
    action("get_intervals", 1),
    action("forget_cards", 1),
    action("relearn_cards", 1),
    action("answer_cards", 1),
    action("get_ease_factors", 1),
    action("set_ease_factors", 1),
    action("set_specific_value_of_card", 1),
    action("set_due_date", 1),
];

const MODEL_ACTIONS: &[ActionDef] = &[
    action("model_names", 0),
    action("model_names_and_ids", 0),
    action("find_models_by_id", 1),
    action("find_models_by_name", 1),
    action("model_field_names", 1),
    action("model_field_descriptions", 1),
    action("model_field_fonts", 1),
    action("model_fields_on_templates", 1),
    action("create_model", 1),
    action("model_templates", 1),
    action("model_styling", 1),
    action("update_model_templates", 1),
    action("update_model_styling", 1),
    action("find_and_replace_in_models", 1),
    action("model_template_rename", 1),
    action("model_template_add", 1),
    action("model_template_remove", 1),
    action("model_field_rename", 1),
    action("model_field_add", 1),
    action("model_field_remove", 1),
    action("model_field_set_font", 1),
];

const MEDIA_ACTIONS: &[ActionDef] = &[
    action("store_media_file", 1),
    action("retrieve_media_file", 1),
    action("get_media_files_names", 1),
    action("get_media_dir_path", 0),
    action("delete_media_file", 1),
];

const GRAPHICAL_ACTIONS: &[ActionDef] = &[
    action("gui_browse", 1),
    action("gui_select_note", 1),
    action("gui_selected_notes", 0),
    action("gui_add_cards", 1),
    action("gui_edit_note", 1),
    action("gui_current_card", 0),
    action("gui_start_card_timer", 0),
    action("gui_show_question", 0),
    action("gui_show_answer", 0),
    action("gui_answer_card", 1),
    action("gui_undo", 0),
    action("gui_deck_overview", 1),
    action("gui_deck_browser", 0),
    action("gui_deck_review", 1),
    action("gui_import_file", 1),
    action("gui_check_database", 0),
    action("gui_exit_anki", 0),
];

const STATISTICS_ACTIONS: &[ActionDef] = &[
    action("get_num_cards_reviewed_today", 0),
    action("get_num_cards_reviewed_by_day", 0),
    action("get_collection_stats_html", 1),
    action("card_reviews", 1),
    action("get_reviews_of_cards", 1),
    action("get_latest_review_id", 1),
    action("insert_reviews", 1),
];

const MISC_ACTIONS: &[ActionDef] = &[
    action("version", 0),
    action("request_permission", 0),
    action("api_reflect", 1),
    action("sync", 0),
    action("get_profiles", 0),
    action("get_active_profile", 0),
    action("load_profile", 1),
    action("multi", 1),
    action("export_package", 1),
    action("import_package", 1),
    action("reload_collection", 0),
];

/// All action groups, in display order.
pub const GROUPS: &[ActionGroup] = &[
    ActionGroup { name: "decks", actions: DECK_ACTIONS },
    ActionGroup { name: "notes", actions: NOTE_ACTIONS },
    ActionGroup { name: "cards", actions: CARD_ACTIONS },
    ActionGroup { name: "models", actions: MODEL_ACTIONS },
    ActionGroup { name: "media", actions: MEDIA_ACTIONS },
    ActionGroup { name: "graphical", actions: GRAPHICAL_ACTIONS },
    ActionGroup { name: "statistics", actions: STATISTICS_ACTIONS },
    ActionGroup { name: "miscellaneous", actions: MISC_ACTIONS },
];

/// Iterate over every declared action.
pub fn actions() -> impl Iterator<Item = &'static ActionDef> {
    GROUPS.iter().flat_map(|group| group.actions.iter())
}

/// Lookup table from underscore action name to its definition.
///
/// Built once at process start; read-only afterwards.
#[derive(Debug)]
pub struct ActionTable {
    index: HashMap<&'static str, &'static ActionDef>,
}

impl ActionTable {
    /// Build the table from the declared catalog.
    pub fn new() -> Self {
        Self {
            index: actions().map(|def| (def.name, def)).collect(),
        }
    }

    /// Look up an action by its underscore name.
    pub fn get(&self, name: &str) -> Option<&'static ActionDef> {
        self.index.get(name).copied()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if the table is empty (it never is for the built-in catalog).
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}
