use std::io::Read;

use crate::error::Result;
use crate::loader::{Document, Loader};

/// Loads the whole input as a single document with no metadata
pub struct TextLoader<R> {
    reader: R,
}

impl<R: Read> TextLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> Loader for TextLoader<R> {
    fn load(&mut self) -> Result<Vec<Document>> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;
        Ok(vec![Document::new(content)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_input_is_one_document() {
        let mut loader = TextLoader::new("line one\nline two\n".as_bytes());
        let docs = loader.load().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].content, "line one\nline two\n");
        assert!(docs[0].metadata.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let mut loader = TextLoader::new(&[0xff, 0xfe, 0x00][..]);
        assert!(loader.load().is_err());
    }
}
