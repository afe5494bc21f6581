//! Corpus error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading corpus documents.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A bill, legislator, or session directory does not exist.
    #[error("{kind} not found: {}", path.display())]
    NotFound { kind: RecordKind, path: PathBuf },

    /// A document is not valid JSON for its record type.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other filesystem failure.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record id that would escape the corpus directory.
    #[error("invalid record id: {0:?}")]
    InvalidId(String),
}

/// The kind of record a path points at, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Bill,
    Legislator,
    SessionDirectory,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bill => "bill",
            Self::Legislator => "legislator",
            Self::SessionDirectory => "session directory",
        })
    }
}
