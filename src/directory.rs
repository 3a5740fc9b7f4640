use std::fs::File;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::csv_loader::CsvLoader;
use crate::epub_loader::EpubLoader;
use crate::error::{LoaderError, Result};
use crate::html_loader::HtmlLoader;
use crate::loader::{Document, Loader, FILE_NAME};
use crate::pdf_loader::PdfLoader;
use crate::splitter::TextSplitter;
use crate::text_loader::TextLoader;

/// Input formats recognised by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
    Csv,
    Html,
    Epub,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "html" => Some(Self::Html),
            "epub" => Some(Self::Epub),
            _ => None,
        }
    }
}

/// Chunks produced from one file
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub documents: Vec<Document>,
}

/// Open `path` with the loader matching its extension
pub fn open_loader(path: &Path) -> Result<Box<dyn Loader>> {
    let kind =
        FileKind::from_path(path).ok_or_else(|| LoaderError::UnsupportedFileType(path.to_path_buf()))?;
    let file = File::open(path)?;

    let loader: Box<dyn Loader> = match kind {
        FileKind::Pdf => Box::new(PdfLoader::new(file)),
        FileKind::Text => Box::new(TextLoader::new(file)),
        FileKind::Csv => Box::new(CsvLoader::new(file)),
        FileKind::Html => Box::new(HtmlLoader::new(file)),
        FileKind::Epub => {
            let mut loader = EpubLoader::new(file);
            if let Some(name) = base_name(path) {
                loader = loader.with_file_name(name);
            }
            Box::new(loader)
        }
    };

    Ok(loader)
}

/// Load and split a single file
pub fn read_file_doc(path: &Path, splitter: &dyn TextSplitter) -> Result<Vec<Document>> {
    let mut loader = open_loader(path)?;
    loader.load_and_split(splitter)
}

/// Walk `path` and load every supported file beneath it.
///
/// Files that fail to load are logged and skipped; only a failure to walk
/// the tree is returned as an error. Each chunk's `file_name` is set to the
/// base name of the file it came from.
pub fn load_from_path(path: &Path, splitter: &dyn TextSplitter) -> Result<Vec<LoadedFile>> {
    info!("Loading from path: {}", path.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut loaded = Vec::new();
    for file in files {
        let mut documents = match read_file_doc(&file, splitter) {
            Ok(docs) => docs,
            Err(e @ LoaderError::UnsupportedFileType(_)) => {
                warn!("skipping file: {}", e);
                continue;
            }
            Err(e) => {
                error!(path = %file.display(), "error reading file: {}", e);
                continue;
            }
        };

        let name = base_name(&file).map(Value::from).unwrap_or(Value::Null);
        for doc in &mut documents {
            doc.metadata.insert(FILE_NAME.to_string(), name.clone());
        }

        info!(path = %file.display(), chunks = documents.len(), "loaded file");
        loaded.push(LoadedFile {
            path: file,
            documents,
        });
    }

    Ok(loaded)
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_path(Path::new("a/b.pdf")), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_path(Path::new("notes.TXT")), Some(FileKind::Text));
        assert_eq!(FileKind::from_path(Path::new("data.csv")), Some(FileKind::Csv));
        assert_eq!(FileKind::from_path(Path::new("page.html")), Some(FileKind::Html));
        assert_eq!(FileKind::from_path(Path::new("book.Epub")), Some(FileKind::Epub));
        assert_eq!(FileKind::from_path(Path::new("readme.md")), None);
        assert_eq!(FileKind::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_unsupported_extension_is_rejected_before_opening() {
        let err = open_loader(Path::new("/nonexistent/file.docx")).err().unwrap();
        assert!(matches!(err, LoaderError::UnsupportedFileType(_)));
    }
}
