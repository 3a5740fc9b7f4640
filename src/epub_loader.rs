use std::io::{self, Read, Seek};

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{EntryStage, LoaderError, Result};
use crate::loader::{Document, Loader, CHAPTER_FILE, CHAPTER_IDX, FILE_NAME};
use crate::markup::strip_html;

const MAX_PREALLOC: u64 = 1 << 20;

/// Loads an EPUB as one document per `.xhtml`/`.html` entry, in archive order.
///
/// The archive is re-read on every [`Loader::load`]; nothing is cached
/// between calls.
pub struct EpubLoader<R> {
    reader: R,
    file_name: Option<String>,
}

impl<R: Read + Seek> EpubLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            file_name: None,
        }
    }

    /// Name recorded in metadata and error messages; never used for lookup
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    fn read_entry(archive: &mut ZipArchive<&mut R>, index: usize, name: &str) -> Result<Vec<u8>> {
        let entry_error = |stage: EntryStage, source: ZipError| LoaderError::EntryRead {
            entry: name.to_string(),
            stage,
            source,
        };

        let mut entry = archive
            .by_index(index)
            .map_err(|source| entry_error(EntryStage::Open, source))?;

        // The declared size is untrusted, so it only bounds the initial allocation.
        let declared = entry.size();
        let mut bytes = Vec::with_capacity(declared.min(MAX_PREALLOC) as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| entry_error(EntryStage::Read, ZipError::Io(e)))?;

        if bytes.len() as u64 != declared {
            return Err(entry_error(
                EntryStage::Read,
                ZipError::Io(io::ErrorKind::UnexpectedEof.into()),
            ));
        }

        Ok(bytes)
    }
}

impl<R: Read + Seek> Loader for EpubLoader<R> {
    fn load(&mut self) -> Result<Vec<Document>> {
        let mut archive =
            ZipArchive::new(&mut self.reader).map_err(|source| LoaderError::ArchiveOpen {
                file_name: self.file_name.clone(),
                source,
            })?;

        let mut docs = Vec::new();

        for index in 0..archive.len() {
            let name = match archive.name_for_index(index) {
                Some(name) if is_chapter(name) => name.to_string(),
                _ => continue,
            };

            let bytes = Self::read_entry(&mut archive, index, &name)?;
            let text = strip_html(&String::from_utf8_lossy(&bytes));

            let chapter_idx = docs.len();
            debug!(chapter = %name, chapter_idx, chars = text.len(), "extracted chapter");

            docs.push(
                Document::new(text)
                    .with_metadata(FILE_NAME, self.file_name.clone())
                    .with_metadata(CHAPTER_FILE, name)
                    .with_metadata(CHAPTER_IDX, chapter_idx),
            );
        }

        if docs.is_empty() {
            return Err(LoaderError::NoContent {
                file_name: self.file_name.clone(),
            });
        }

        Ok(docs)
    }
}

fn is_chapter(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".xhtml") || lower.ends_with(".html")
}
