use anyhow::{Context, Result};
use clap::Parser;
use search_cli::{load_config, run, OutputFormat};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against a plus/minus query with TF-IDF", long_about = None)]
struct Args {
    /// Input file (stop words, document count, documents, query); stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON config file, e.g. {"max_results": 5}
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of results to print
    #[arg(long, env = "SEARCH_MAX_RESULTS")]
    max_results: Option<usize>,
    /// Print results as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref(), args.max_results)?;
    let format = if args.json { OutputFormat::JsonLines } else { OutputFormat::Text };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.input {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
            run(BufReader::new(file), &mut out, config, format)
        }
        None => run(io::stdin().lock(), &mut out, config, format),
    }
}
