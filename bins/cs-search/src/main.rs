//! cs-search - Catalog search from the command line
//!
//! Runs the storefront's fuzzy ranking, suggestion scoring and highlighting
//! against a JSON catalog file, for tuning thresholds and checking results.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

use cellar_cli::output::Status;
use cellar_telemetry::metrics;
use commands::{highlight, search, similarity, suggest, Context};
use config::Config;

/// Fuzzy catalog search and relevance ranking
#[derive(Parser)]
#[command(name = "cs-search")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a config file (defaults to .cellar-search.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog records against a query
    Search {
        /// Catalog file (JSON array of records), or - for stdin
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Field to search (repeatable; defaults to the configured fields)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Minimum aggregate score to keep a record
        #[arg(long)]
        min_score: Option<f64>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Match with exact case
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Score product suggestions by name and region
    Suggest {
        /// Catalog file (JSON array of records), or - for stdin
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of suggestions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Mark keyword occurrences in a piece of text
    Highlight {
        /// Text to highlight
        text: String,

        /// Keywords to mark
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Match with exact case
        #[arg(long)]
        case_sensitive: bool,

        /// Print escaped HTML with matches in <mark> tags
        #[arg(long)]
        mark: bool,
    },

    /// Edit distance and similarity between two strings
    Similarity {
        a: String,
        b: String,

        /// Compare with exact case
        #[arg(long)]
        case_sensitive: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let mut telemetry = config.schema.telemetry.clone();
    if cli.verbose {
        telemetry.log_level = "debug".to_string();
    }
    let _guard = cellar_telemetry::init(&telemetry)?;

    if cli.verbose && !cli.json {
        match &config.path {
            Some(path) => Status::info(&format!("Using config {}", path.display())),
            None => Status::info("Using default config"),
        }
    }

    let ctx = Context {
        config: config.schema,
        json: cli.json,
        color: std::io::stdout().is_terminal(),
    };

    match cli.command {
        Commands::Search { catalog, query, fields, min_score, max_results, case_sensitive } => {
            search::run(
                &ctx,
                search::SearchArgs { catalog, query, fields, min_score, max_results, case_sensitive },
            )?
        }

        Commands::Suggest { catalog, query, limit } => suggest::run(&ctx, catalog, query, limit)?,

        Commands::Highlight { text, keywords, case_sensitive, mark } => {
            highlight::run(&ctx, &text, &keywords, case_sensitive, mark)?
        }

        Commands::Similarity { a, b, case_sensitive } => similarity::run(&ctx, &a, &b, case_sensitive)?,
    }

    if cli.metrics {
        eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    Ok(())
}
