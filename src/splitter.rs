//! Recursive character text splitting

use crate::error::{LoaderError, Result};
use crate::loader::Document;

/// Splits text into bounded, overlapping chunks
pub trait TextSplitter {
    fn split_text(&self, text: &str) -> Vec<String>;
}

/// Split each document and copy its metadata onto every chunk
pub fn split_documents(splitter: &dyn TextSplitter, docs: Vec<Document>) -> Vec<Document> {
    let mut chunks = Vec::new();
    for doc in docs {
        for chunk in splitter.split_text(&doc.content) {
            chunks.push(Document {
                content: chunk,
                metadata: doc.metadata.clone(),
            });
        }
    }
    chunks
}

/// Settings for [`RecursiveCharacter`]
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterConfig {
    /// Upper bound on chunk length, in characters
    pub chunk_size: usize,
    /// Approximate number of characters shared by adjacent chunks
    pub chunk_overlap: usize,
    /// Separators tried in order, coarsest first; `""` splits per character
    pub separators: Vec<String>,
    /// Keep the separator at the start of the piece that follows it
    pub keep_separator: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: 300,
            chunk_overlap: 30,
            separators: [":", ",", ";", ".", ""].iter().map(|s| s.to_string()).collect(),
            keep_separator: true,
        }
    }
}

/// Splits on the first separator present in the text, recursing into
/// pieces that are still too long with the remaining separators.
#[derive(Debug, Clone)]
pub struct RecursiveCharacter {
    config: SplitterConfig,
}

impl RecursiveCharacter {
    pub fn new(config: SplitterConfig) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(LoaderError::invalid_splitter("chunk size must be positive"));
        }
        if config.chunk_overlap >= config.chunk_size {
            return Err(LoaderError::invalid_splitter(format!(
                "chunk overlap {} must be smaller than chunk size {}",
                config.chunk_overlap, config.chunk_size
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        let mut final_chunks = Vec::new();

        let (separator, finer) = choose_separator(text, separators);
        let splits = split_on(text, separator, self.config.keep_separator);
        let merge_separator = if self.config.keep_separator { "" } else { separator };

        let mut good_splits: Vec<String> = Vec::new();
        for split in splits {
            if char_len(&split) < self.config.chunk_size {
                good_splits.push(split);
                continue;
            }

            if !good_splits.is_empty() {
                final_chunks.extend(self.merge_splits(&good_splits, merge_separator));
                good_splits.clear();
            }

            if finer.is_empty() {
                final_chunks.push(split);
            } else {
                final_chunks.extend(self.split_with(&split, finer));
            }
        }

        if !good_splits.is_empty() {
            final_chunks.extend(self.merge_splits(&good_splits, merge_separator));
        }

        final_chunks
    }

    fn merge_splits(&self, splits: &[String], separator: &str) -> Vec<String> {
        let chunk_size = self.config.chunk_size;
        let chunk_overlap = self.config.chunk_overlap;
        let separator_len = char_len(separator);

        let mut docs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut total = 0usize;

        for split in splits {
            let split_len = char_len(split);
            let mut total_with_split = total + split_len;
            if !current.is_empty() {
                total_with_split += separator_len;
            }

            if total_with_split > chunk_size && !current.is_empty() {
                if let Some(doc) = join_docs(&current, separator) {
                    docs.push(doc);
                }

                // Drop from the front until what is left can serve as overlap.
                while should_pop(chunk_overlap, chunk_size, total, split_len, separator_len, current.len()) {
                    total -= char_len(current[0]);
                    if current.len() > 1 {
                        total -= separator_len;
                    }
                    current.remove(0);
                }
            }

            current.push(split);
            total += split_len;
            if current.len() > 1 {
                total += separator_len;
            }
        }

        if let Some(doc) = join_docs(&current, separator) {
            docs.push(doc);
        }

        docs
    }
}

impl Default for RecursiveCharacter {
    fn default() -> Self {
        Self {
            config: SplitterConfig::default(),
        }
    }
}

impl TextSplitter for RecursiveCharacter {
    fn split_text(&self, text: &str) -> Vec<String> {
        self.split_with(text, &self.config.separators)
    }
}

fn choose_separator<'a>(text: &str, separators: &'a [String]) -> (&'a str, &'a [String]) {
    for (i, sep) in separators.iter().enumerate() {
        if sep.is_empty() || text.contains(sep.as_str()) {
            return (sep.as_str(), &separators[i + 1..]);
        }
    }
    match separators.last() {
        Some(last) => (last.as_str(), &[]),
        None => ("", &[]),
    }
}

fn split_on(text: &str, separator: &str, keep_separator: bool) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }

    text.split(separator)
        .enumerate()
        .map(|(i, piece)| {
            if keep_separator && i > 0 {
                format!("{}{}", separator, piece)
            } else {
                piece.to_string()
            }
        })
        .collect()
}

fn should_pop(
    chunk_overlap: usize,
    chunk_size: usize,
    total: usize,
    split_len: usize,
    separator_len: usize,
    current_len: usize,
) -> bool {
    let separator_len = if current_len < 2 { 0 } else { separator_len };
    current_len > 0
        && (total > chunk_overlap || (total + split_len + separator_len > chunk_size && total > 0))
}

fn join_docs(docs: &[&str], separator: &str) -> Option<String> {
    let joined = docs.join(separator);
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
