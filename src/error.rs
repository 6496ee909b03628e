//! Error types for the PDF protection library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF protection library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file not found
    #[error("Input PDF not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Password fails the strength predicate. Advisory: callers may let the
    /// user override, except for the hard 8-character floor enforced at
    /// encryption time.
    #[error("{0}")]
    WeakPassword(String),

    /// Owner password too short or equal to the user password
    #[error("{0}")]
    InvalidOwnerPassword(String),

    /// Ran out of collision suffixes for the current date
    #[error("Maximum file increment limit (99) reached for this date")]
    NamingLimitExceeded,

    /// Failure while building or applying the encryption state
    #[error("Encryption failed: {0}")]
    Encryption(String),
}
