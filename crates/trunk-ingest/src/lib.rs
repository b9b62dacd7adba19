pub mod document;
pub mod error;

pub use document::{ExportDocument, TWIG_DEPTH, parse_records, read_document};
pub use error::{IngestError, Result};
