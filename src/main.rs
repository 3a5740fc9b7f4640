mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use docload::{load_from_path, RecursiveCharacter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let splitter =
        RecursiveCharacter::new(cli.splitter_config()).context("Invalid splitter settings")?;
    let config = splitter.config();
    info!(
        chunk_size = config.chunk_size,
        chunk_overlap = config.chunk_overlap,
        keep_separator = config.keep_separator,
        "splitter ready"
    );

    let files = load_from_path(&cli.input, &splitter)
        .with_context(|| format!("Failed to load documents from {}", cli.input.display()))?;

    if let Some(ref path) = cli.output {
        output::write_json_lines_file(path, &files)?;
    }
    if cli.json {
        output::write_json_lines(std::io::stdout().lock(), &files)?;
    }

    let chunk_count: usize = files.iter().map(|f| f.documents.len()).sum();
    info!("Loaded {} chunks from {} files", chunk_count, files.len());

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
