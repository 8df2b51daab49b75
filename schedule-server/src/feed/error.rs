//! Feed loading error types.
//!
//! Every variant is fatal for the whole load: a table that cannot be
//! trusted in full is not ingested at all, and the caller decides how
//! to abort. Nothing here is retried or recovered internally.

use std::path::PathBuf;

/// Errors that can occur while loading a feed table.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Source file missing or unreadable
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that could not be opened
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row does not match the expected column contract
    #[error(
        "{file}: header mismatch: expected columns {expected:?} at the checked positions, found {found:?}"
    )]
    SchemaMismatch {
        /// Table the header came from
        file: &'static str,
        /// Column names required by the consumer, in checked order
        expected: Vec<&'static str>,
        /// The full header row actually observed
        found: Vec<String>,
    },

    /// A data row has fewer fields than the checked columns require
    #[error("{file}: row at line {line}: need at least {required} fields, found {found}")]
    RowShape {
        file: &'static str,
        line: u64,
        required: usize,
        found: usize,
    },

    /// The CSV layer rejected a record (quoting, encoding)
    #[error("{file}: malformed row: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
}
