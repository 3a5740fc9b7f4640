use std::io::Read;

use crate::error::Result;
use crate::loader::{Document, Loader};
use crate::markup::html_to_text;

/// Loads an HTML page as a single text document
pub struct HtmlLoader<R> {
    reader: R,
}

impl<R: Read> HtmlLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> Loader for HtmlLoader<R> {
    fn load(&mut self) -> Result<Vec<Document>> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        let html = String::from_utf8_lossy(&bytes);
        Ok(vec![Document::new(html_to_text(&html))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_becomes_one_document() {
        let html = "<html><body><h2>Heading</h2><p>Paragraph text here.</p></body></html>";
        let docs = HtmlLoader::new(html.as_bytes()).load().unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].content.contains("Heading"));
        assert!(docs[0].content.contains("Paragraph text here."));
        assert!(!docs[0].content.contains("<body>"));
    }
}
