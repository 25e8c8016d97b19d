//! Error handling for CADVault
//!
//! The ingestion engine has a deliberately small error surface: rejecting a
//! file whose extension is outside the supported set is the only hard
//! failure. Malformed content inside a supported format never errors — the
//! decoders degrade to the emptiest valid scene instead, so one bad upload
//! cannot take down a long-running ingestion worker.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Import error type
///
/// Represents the failures the format dispatcher can report to callers.
#[derive(Error, Debug)]
pub enum ImportError {
    /// File extension is not in the supported allow-list
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The rejected extension, lowercased, including the leading dot
        /// (empty when the filename has no extension at all).
        extension: String,
    },

    /// Failed to read a source file from disk
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type using ImportError
pub type Result<T> = std::result::Result<T, ImportError>;
