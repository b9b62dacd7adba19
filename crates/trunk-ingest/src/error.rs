//! Error types for reading trunking system exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort reading an export document.
///
/// Missing attributes are not errors; they surface as absent values on
/// [`trunk_model::RawRecord`].
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid UTF-8.
    #[error("file is not valid UTF-8: {path}")]
    Encoding { path: PathBuf },

    /// The document is not well-formed XML.
    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// The document has no root element.
    #[error("document has no root element")]
    NoRoot,

    /// More than one top-level element.
    #[error("unexpected second root element <{name}> at byte {position}")]
    MultipleRoots { name: String, position: u64 },

    /// The document ended with elements still open.
    #[error("document ended with {open} unclosed element(s)")]
    Truncated { open: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;
