//! Error types for table layout and rendering.
//!
//! [`TableError`] is what callers of [`Table`](crate::Table) see. Failures
//! raised by a [`Canvas`](crate::Canvas) are wrapped in [`CanvasError`] and
//! passed through untouched, so the original cause stays reachable via
//! [`std::error::Error::source`].

use thiserror::Error;

/// Errors raised by the table facade and the layout pipeline.
#[derive(Debug, Error)]
pub enum TableError {
    /// A record did not carry one value per column.
    #[error("record has {actual} values but the table has {expected} columns")]
    ArityMismatch { expected: usize, actual: usize },

    /// The table cannot be laid out with its current columns and geometry.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The drawing surface failed.
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

/// Errors raised by a drawing surface.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Writing the finished document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The display list could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A drawing call arrived before any page was started.
    #[error("no page has been added")]
    NoPage,

    /// Backend-specific failure (missing image, unknown font, ...).
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for CanvasError {
    fn from(err: serde_json::Error) -> Self {
        CanvasError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for CanvasError {
    fn from(err: serde_yaml::Error) -> Self {
        CanvasError::Serialization(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
