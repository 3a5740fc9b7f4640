//! Load PDF, text, CSV, HTML and EPUB files into documents and split them
//! into overlapping chunks for indexing.
//!
//! Every format implements [`Loader`]; [`load_from_path`] picks one per file
//! by extension.

pub mod csv_loader;
pub mod directory;
pub mod epub_loader;
pub mod error;
pub mod html_loader;
pub mod loader;
pub mod markup;
pub mod pdf_loader;
pub mod splitter;
pub mod text_loader;

pub use csv_loader::CsvLoader;
pub use directory::{load_from_path, open_loader, read_file_doc, FileKind, LoadedFile};
pub use epub_loader::EpubLoader;
pub use error::{EntryStage, LoaderError, Result};
pub use html_loader::HtmlLoader;
pub use loader::{Document, Loader, Metadata};
pub use markup::strip_html;
pub use pdf_loader::PdfLoader;
pub use splitter::{split_documents, RecursiveCharacter, SplitterConfig, TextSplitter};
pub use text_loader::TextLoader;
