//! Error types for geulgyeob.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the word list.
///
/// Reads never produce these: a missing or corrupt entry loads as an
/// empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem write failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The list could not be encoded as JSON.
    #[error("failed to encode word list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised by draft edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Removal index past the end of the draft.
    #[error("index {index} out of range for draft of {len} words")]
    IndexOutOfRange { index: usize, len: usize },
}
