#![deny(unsafe_code)]

use std::fmt;
use std::path::PathBuf;

/// Which rule table a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSetKind {
    Exclusion,
    GenericLabel,
}

impl fmt::Display for RuleSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusion => f.write_str("exclusion"),
            Self::GenericLabel => f.write_str("generic label"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{set} rule {label:?} has range_start {start} greater than range_end {end}")]
    InvertedRange {
        set: RuleSetKind,
        label: String,
        start: u64,
        end: u64,
    },

    #[error("{set} rules {first:?} and {second:?} overlap at {start}-{end}")]
    Overlap {
        set: RuleSetKind,
        first: String,
        second: String,
        start: u64,
        end: u64,
    },

    #[error("generic label rule {label:?} is missing label_digits")]
    MissingLabelDigits { label: String },

    #[error("exclusion rule {label:?} must not set label_digits")]
    UnexpectedLabelDigits { label: String },
}

impl RulesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
