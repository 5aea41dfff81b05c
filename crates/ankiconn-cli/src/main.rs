//! Command-line front end for the AnkiConnect API.
//!
//! The binary is thin: it parses connection options, hands the remaining
//! tokens to [`ankiconn_cli::dispatch`], and maps the result to a process
//! exit code (0 = success, 1 = usage error, 2 = transport or remote
//! failure).

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use ankiconn::AnkiClient;
use ankiconn::catalog::ActionTable;
use ankiconn_cli::dispatch;
use clap::Parser;
use tracing::debug;

/// Generic command-line front end for the AnkiConnect API.
#[derive(Parser, Debug)]
#[command(name = "ankiconn")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect URL
    #[arg(long, default_value = "http://127.0.0.1:8765")]
    url: String,

    /// API key, if AnkiConnect is configured to require one
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The action, its --flag=value arguments, and any --with_<modifier>
    /// flags
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let mut builder = AnkiClient::builder()
        .url(&args.url)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(key) = &args.api_key {
        builder = builder.api_key(key);
    }
    let client = builder.build();

    let table = ActionTable::new();
    debug!(actions = table.len(), url = %args.url, "action table ready");

    let mut stdout = io::stdout().lock();
    match dispatch::run(&client, &table, &args.tokens, &mut stdout).await {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            let _ = writeln!(io::stderr(), "Error: {}", error);
            ExitCode::from(dispatch::EXIT_REMOTE)
        }
    }
}
