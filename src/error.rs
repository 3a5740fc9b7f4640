//! Error types for document loading

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors raised while loading or splitting documents
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The byte source is not a readable zip container
    #[error("epubloader: cannot open epub zip reader{}: {source}", display_name(.file_name))]
    ArchiveOpen {
        file_name: Option<String>,
        #[source]
        source: ZipError,
    },

    /// An `.xhtml`/`.html` entry could not be opened or read to the end
    #[error("epubloader: cannot {stage} file inside epub: {entry}: {source}")]
    EntryRead {
        entry: String,
        stage: EntryStage,
        #[source]
        source: ZipError,
    },

    /// The archive parsed but holds no `.xhtml`/`.html` entries
    #[error("epubloader: no .xhtml or .html content found in epub{}", display_name(.file_name))]
    NoContent { file_name: Option<String> },

    /// PDF text extraction failed
    #[error("pdfloader: cannot extract text: {0}")]
    Pdf(String),

    /// CSV decoding failed
    #[error("csvloader: {0}")]
    Csv(#[from] csv::Error),

    /// No loader is registered for the file's extension
    #[error("invalid file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// Splitter settings that cannot produce chunks
    #[error("invalid splitter config: {0}")]
    InvalidSplitterConfig(String),

    /// Directory traversal failed
    #[error("cannot walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Step at which reading an archive entry failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStage {
    Open,
    Read,
}

impl fmt::Display for EntryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Read => f.write_str("read"),
        }
    }
}

impl LoaderError {
    /// Create an invalid splitter config error
    pub fn invalid_splitter(message: impl Into<String>) -> Self {
        Self::InvalidSplitterConfig(message.into())
    }
}

fn display_name(file_name: &Option<String>) -> String {
    match file_name {
        Some(name) => format!(" {}", name),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_names_the_file() {
        let err = LoaderError::NoContent {
            file_name: Some("book.epub".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "epubloader: no .xhtml or .html content found in epub book.epub"
        );
    }

    #[test]
    fn test_entry_read_keeps_cause() {
        let err = LoaderError::EntryRead {
            entry: "OEBPS/ch1.xhtml".to_string(),
            stage: EntryStage::Read,
            source: ZipError::FileNotFound,
        };
        assert!(err
            .to_string()
            .starts_with("epubloader: cannot read file inside epub: OEBPS/ch1.xhtml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_entry_open_is_worded_apart_from_read() {
        let err = LoaderError::EntryRead {
            entry: "ch.html".to_string(),
            stage: EntryStage::Open,
            source: ZipError::FileNotFound,
        };
        assert!(err
            .to_string()
            .starts_with("epubloader: cannot open file inside epub: ch.html"));
    }

    #[test]
    fn test_unnamed_archive_error() {
        let err = LoaderError::NoContent { file_name: None };
        assert_eq!(
            err.to_string(),
            "epubloader: no .xhtml or .html content found in epub"
        );
    }
}
