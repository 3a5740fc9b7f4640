use std::io::Read;

use crate::error::Result;
use crate::loader::{Document, Loader};

/// Metadata key holding the 1-based data row number
pub const ROW: &str = "row";

/// Loads a CSV file as one document per data row.
///
/// The first record is the header. Each row renders as `column: value`
/// lines, optionally restricted to a set of columns.
pub struct CsvLoader<R> {
    reader: R,
    columns: Vec<String>,
}

impl<R: Read> CsvLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            columns: Vec::new(),
        }
    }

    /// Only render these columns; empty means all
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

impl<R: Read> Loader for CsvLoader<R> {
    fn load(&mut self) -> Result<Vec<Document>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(&mut self.reader);

        let headers = rdr.headers()?.clone();
        let mut docs = Vec::new();

        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let lines: Vec<String> = headers
                .iter()
                .zip(record.iter())
                .filter(|(column, _)| self.columns.is_empty() || self.columns.iter().any(|c| c == column))
                .map(|(column, value)| format!("{}: {}", column, value))
                .collect();

            docs.push(Document::new(lines.join("\n")).with_metadata(ROW, i + 1));
        }

        Ok(docs)
    }
}
