use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::splitter::{split_documents, TextSplitter};

/// Metadata attached to a document, keyed by field name
pub type Metadata = BTreeMap<String, Value>;

/// Metadata key holding the logical name of the source file
pub const FILE_NAME: &str = "file_name";
/// Metadata key holding the in-archive path of an EPUB chapter
pub const CHAPTER_FILE: &str = "chapter_file";
/// Metadata key holding the zero-based chapter position
pub const CHAPTER_IDX: &str = "chapter_idx";

/// Shared document representation across all input formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Extracted plain text
    pub content: String,
    pub metadata: Metadata,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Trait for reading document formats (EPUB, PDF, CSV, ...)
pub trait Loader {
    /// Extract every document the source holds
    fn load(&mut self) -> Result<Vec<Document>>;

    /// Extract and hand the result to `splitter`.
    /// A failed `load` is returned unchanged.
    fn load_and_split(&mut self, splitter: &dyn TextSplitter) -> Result<Vec<Document>> {
        let docs = self.load()?;
        Ok(split_documents(splitter, docs))
    }
}
