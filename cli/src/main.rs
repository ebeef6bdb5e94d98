use anyhow::{Context, Result};
use clap::Parser;
use search_cli::{run, OutputFormat, RunOptions};
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-server")]
#[command(about = "Rank documents against a query by TF-IDF", long_about = None)]
struct Args {
    /// Input file (stop words, document count, documents, query); stdin if omitted
    #[arg(long)]
    input: Option<String>,
    /// Maximum number of results to print
    #[arg(long, default_value_t = search_core::MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let opts = RunOptions { max_results: args.max_results, format: args.format };
    let stdout = io::stdout().lock();

    match args.input {
        Some(path) => {
            let f = File::open(&path).with_context(|| format!("failed to open {path}"))?;
            run(BufReader::new(f), stdout, &opts)
        }
        None => run(io::stdin().lock(), stdout, &opts),
    }
}
