use std::path::PathBuf;

use clap::{Parser, Subcommand};
use panchayat::SearchConfig;
use panchayat_core::normalize_to_skeleton;
use panchayat_search::{load_store, render, resolve_records, run_search, stats_report, OutputFormat};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "panchayat-search")]
#[command(about = "Cross-script search over gram panchayat beneficiary lists")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find beneficiaries matching every query term
    Search {
        /// Query terms (Gujarati, Latin transliteration, or numbers)
        #[arg(required = true)]
        query: Vec<String>,

        /// Beneficiary list JSON file (overrides PANCHAYAT_RECORDS)
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Search through the precomputed phonetic index
        #[arg(long)]
        indexed: bool,
    },

    /// Print the phonetic skeleton of some text
    Skeleton {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Summarise a beneficiary list
    Stats {
        /// Beneficiary list JSON file (overrides PANCHAYAT_RECORDS)
        #[arg(short, long)]
        records: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    panchayat::tracing::init();
    let config = SearchConfig::from_env()?;

    match args.command {
        Command::Search {
            query,
            records,
            format,
            indexed,
        } => {
            let path = resolve_records(records, &config)?;
            let store = load_store(&path, &config)?;
            let query = query.join(" ");
            let found = run_search(&store, &query, indexed)?;
            info!(query = %query, matches = found.len(), "search complete");

            let output = render(&found, format, config.mask_digits)?;
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Command::Skeleton { text } => {
            println!("{}", normalize_to_skeleton(&text.join(" ")));
        }
        Command::Stats { records } => {
            let path = resolve_records(records, &config)?;
            let store = load_store(&path, &config)?;
            let report = stats_report(&store, &config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
