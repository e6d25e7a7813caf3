use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use pedkit::algorithm::PedigreeSummary;
use pedkit::async_io::load_pedigree_parquet_async;
use pedkit::io::{is_parquet_path, load_pedigree};
use pedkit::utils::logging::{create_spinner, finish_progress_bar};
use pedkit::{PedigreeConfig, save_pedigree, save_pedigree_parquet};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Load a pedigree, print its summary and optionally save it
#[derive(Debug, Parser)]
#[command(name = "pedkit", version, about, long_about = None)]
struct Cli {
    /// JSON file with pedigree construction settings
    #[arg(long, value_name = "CONFIG_JSON")]
    config: Option<PathBuf>,

    /// Pedigree to load (text, or Parquet by extension)
    input: PathBuf,

    /// Where to save the pedigree (`.parquet` for Parquet, otherwise text)
    output: Option<PathBuf>,
}

fn save(pedigree: &pedkit::Pedigree, path: &Path) -> pedkit::Result<()> {
    if is_parquet_path(path) {
        save_pedigree_parquet(pedigree, path)
    } else {
        save_pedigree(pedigree, path)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => PedigreeConfig::from_json_file(path)?,
        None => PedigreeConfig::default(),
    };

    let start = Instant::now();
    let spinner = create_spinner(Some("Loading pedigree"));
    let pedigree = if is_parquet_path(&args.input) {
        load_pedigree_parquet_async(&args.input, &config).await
    } else {
        load_pedigree(&args.input, &config)
    };
    finish_progress_bar(&spinner, Some("Pedigree loaded"));
    let pedigree =
        pedigree.with_context(|| format!("Failed to load {}", args.input.display()))?;
    info!(
        "Loaded {} individuals in {:?}",
        pedigree.len(),
        start.elapsed()
    );

    let pool = config.thread_pool()?;
    let summary = pool.install(|| PedigreeSummary::describe(&pedigree))?;
    println!("{}", summary.report());

    if let Some(output) = &args.output {
        save(&pedigree, output)
            .with_context(|| format!("Failed to save {}", output.display()))?;
    }

    Ok(())
}
