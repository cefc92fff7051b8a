//! Guard error types
//!
//! `GuardError` is what a protected call may fail with. It never leaves the
//! capture region: the adapter turns it into a [`Failure`] record that is
//! stored on the [`ErrorContext`](crate::ErrorContext).

use std::fmt;

use thiserror::Error;

/// Failure raised inside a protected call
#[derive(Debug, Error)]
pub enum GuardError {
    /// MuPDF reported an error through its context
    #[error("MuPDF error: {0}")]
    MuPdf(#[from] mupdf::Error),

    /// Reading caller-provided input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The call panicked
    #[error("Panic: {0}")]
    Panic(String),
}

impl GuardError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GuardError::MuPdf(_) => FailureKind::Library,
            GuardError::Io(_) => FailureKind::Io,
            GuardError::Panic(_) => FailureKind::Panic,
        }
    }
}

/// Coarse classification of a stored failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Library,
    Io,
    Panic,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Library => "library",
            FailureKind::Io => "io",
            FailureKind::Panic => "panic",
        };
        f.write_str(name)
    }
}

/// Failure record kept by the error context after a sentinel return
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct Failure {
    /// Name of the adapted operation
    pub operation: &'static str,
    /// What went wrong
    pub kind: FailureKind,
    /// Message as reported by the underlying library
    pub message: String,
}

impl Failure {
    pub fn new(operation: &'static str, error: &GuardError) -> Self {
        let message = match error {
            GuardError::MuPdf(e) => e.to_string(),
            GuardError::Io(e) => e.to_string(),
            GuardError::Panic(msg) => msg.clone(),
        };
        Self {
            operation,
            kind: error.kind(),
            message,
        }
    }
}

/// Result type for callers converting sentinels back into errors
pub type GuardResult<T> = std::result::Result<T, Failure>;
