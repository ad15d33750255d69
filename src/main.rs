//! kyc-screen - fuzzy watchlist screening CLI
//!
//! Thin wrapper over the library: resolves reference data, runs one
//! command, prints text or JSON.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial CLI

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use kyc_screen::{commands, config, output, ReferenceDataStore, DEFAULT_THRESHOLD};

/// Screen person names against sanctions-style watchlists.
#[derive(Parser, Debug)]
#[command(name = "kyc-screen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Watchlist data file (JSON); defaults to KYC_WATCHLIST_PATH, then the built-in lists
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Screen a name against every watchlist
    Screen {
        /// Name to screen
        name: Vec<String>,

        /// Minimum similarity for a match (0.0-1.0)
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Match a name against one watchlist entry
    Match {
        /// Name to match
        name: String,

        /// Watchlist name (e.g., OFAC)
        #[arg(short, long)]
        list: String,

        /// Primary name of the entry
        #[arg(short, long)]
        entry: String,

        /// Minimum similarity for a match (0.0-1.0)
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Print the normalized form of a name
    Normalize {
        /// Name to normalize
        name: Vec<String>,
    },

    /// Score the similarity of two names
    Similarity {
        /// First name
        a: String,

        /// Second name
        b: String,
    },

    /// List loaded watchlists
    Lists,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = output::OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let result = run(cli, &output_controls);

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, output_controls: &output::OutputControls) -> anyhow::Result<()> {
    let data = cli.data.as_deref();

    match cli.command {
        Command::Screen { name, threshold } => {
            commands::screen::screen(load_store(data)?, &name.join(" "), threshold, output_controls)
        }
        Command::Match { name, list, entry, threshold } => commands::screen::match_one(
            &load_store(data)?,
            &name,
            &list,
            &entry,
            threshold,
            output_controls,
        ),
        Command::Normalize { name } => {
            commands::names::normalize_name(&name.join(" "), output_controls)
        }
        Command::Similarity { a, b } => commands::names::compare(&a, &b, output_controls),
        Command::Lists => commands::lists::list(&load_store(data)?, output_controls),
    }
}

fn load_store(data: Option<&Path>) -> anyhow::Result<ReferenceDataStore> {
    let source = config::resolve_data_source(data);
    tracing::debug!(?source, "resolved watchlist source");
    config::load_store(&source)
}
