use clap::Parser;
use std::path::PathBuf;

use docload::SplitterConfig;

/// Load documents from a directory tree and split them into chunks
#[derive(Parser, Debug)]
#[command(name = "docload", version, about)]
pub struct Cli {
    /// File or directory to load (.pdf, .txt, .csv, .html, .epub)
    pub input: PathBuf,

    /// Maximum chunk length in characters
    #[arg(long, default_value_t = 300)]
    pub chunk_size: usize,

    /// Characters shared between adjacent chunks
    #[arg(long, default_value_t = 30)]
    pub chunk_overlap: usize,

    /// Separator to split on, coarsest first. Repeat to give several.
    /// Defaults to ":" "," ";" "." "".
    #[arg(long = "separator", value_name = "SEP", allow_hyphen_values = true)]
    pub separators: Vec<String>,

    /// Drop separators from chunk text instead of keeping them
    #[arg(long, default_value_t = false)]
    pub no_keep_separator: bool,

    /// Print chunks to stdout as JSON lines
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write chunks as JSON lines to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn splitter_config(&self) -> SplitterConfig {
        let defaults = SplitterConfig::default();
        SplitterConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            separators: if self.separators.is_empty() {
                defaults.separators
            } else {
                self.separators.clone()
            },
            keep_separator: !self.no_keep_separator,
        }
    }
}
