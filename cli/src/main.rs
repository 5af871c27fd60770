mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter};
use topdocs_core::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{run_classic, run_query};

#[derive(Parser)]
#[command(name = "topdocs")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read stop words, documents with ratings and a query from stdin
    Classic {
        #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
        max_results: usize,
    },
    /// Search a JSON/JSONL corpus file or directory
    Query {
        /// Corpus path (file or directory)
        #[arg(long)]
        corpus: String,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
        max_results: usize,
        /// Print results as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
        query: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let out = BufWriter::new(io::stdout().lock());

    match cli.command {
        Commands::Classic { max_results } => {
            run_classic(io::stdin().lock(), out, SearchConfig::new(max_results)?)
        }
        Commands::Query { corpus, stop_words, max_results, json, query } => {
            run_query(&corpus, &stop_words, SearchConfig::new(max_results)?, json, &query, out)
        }
    }
}
