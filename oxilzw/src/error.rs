//! LZW decoding error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting codes or rebuilding the dictionary.
#[derive(Debug, Error)]
pub enum LzwError {
    /// The compressed input could not be read.
    #[error("Source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Dictionary size is outside the supported range.
    #[error("Dictionary size must be between 256 and 4096 (8 or 12 bits), got {size}")]
    ConfigurationError {
        /// Requested maximum number of dictionary entries.
        size: u64,
    },

    /// First code of the stream is not a single-byte code.
    #[error("Unknown seed code: {0}")]
    UnknownSeedCode(u16),

    /// The previous code no longer resolves to a dictionary entry.
    #[error("Internal inconsistency: previous code {code} missing from dictionary")]
    InternalInconsistency {
        /// The previous code that failed to resolve.
        code: u16,
    },

    /// The input is too short to hold a single code.
    #[error("Truncated stream: {len} byte(s) cannot hold a code")]
    TruncatedStream {
        /// Input length in bytes.
        len: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
