use std::io::Read;

use tracing::warn;

use crate::error::{LoaderError, Result};
use crate::loader::{Document, Loader};

/// Metadata key holding the 1-based page number
pub const PAGE: &str = "page";
/// Metadata key holding the page count of the source PDF
pub const TOTAL_PAGES: &str = "total_pages";

/// Loads a PDF as one document per page with extractable text
pub struct PdfLoader<R> {
    reader: R,
}

impl<R: Read> PdfLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> Loader for PdfLoader<R> {
    fn load(&mut self) -> Result<Vec<Document>> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| LoaderError::Pdf(e.to_string()))?;

        if text.trim().is_empty() {
            warn!("PDF appears to be scanned or has no extractable text");
        }

        Ok(split_pages(&text))
    }
}

/// Pages are separated by form feed in the extracted text
fn split_pages(text: &str) -> Vec<Document> {
    let pages: Vec<&str> = text.split('\x0C').collect();
    let total_pages = pages.len();

    pages
        .iter()
        .enumerate()
        .filter(|(_, page)| !page.trim().is_empty())
        .map(|(i, page)| {
            Document::new(page.trim())
                .with_metadata(PAGE, i + 1)
                .with_metadata(TOTAL_PAGES, total_pages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_numbers_from_one() {
        let docs = split_pages("first page\n\x0Csecond page\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].content, "first page");
        assert_eq!(docs[0].metadata[PAGE], 1);
        assert_eq!(docs[1].content, "second page");
        assert_eq!(docs[1].metadata[PAGE], 2);
        assert_eq!(docs[1].metadata[TOTAL_PAGES], 2);
    }

    #[test]
    fn test_blank_pages_are_skipped() {
        let docs = split_pages("one\x0C  \n\x0Cthree");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].metadata[PAGE], 3);
        assert_eq!(docs[1].metadata[TOTAL_PAGES], 3);
    }

    #[test]
    fn test_garbage_is_a_pdf_error() {
        let err = PdfLoader::new(&b"not a pdf"[..]).load().unwrap_err();
        assert!(matches!(err, LoaderError::Pdf(_)));
    }
}
