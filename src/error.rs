//! Error types for body-highlighter.
//!
//! Rendering itself never fails. Errors only come from the boundary where
//! untyped input (strings, JSON, files) becomes typed props, and from
//! writing SVG output.

use thiserror::Error;

/// Errors that can occur when building props or writing output.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// String is not one of the 44 body part slugs.
    #[error("unknown body part slug: {0:?}")]
    UnknownSlug(String),

    /// String is neither "male" nor "female".
    #[error("unknown gender: {0:?} (expected \"male\" or \"female\")")]
    UnknownGender(String),

    /// String is neither "front" nor "back".
    #[error("unknown side: {0:?} (expected \"front\" or \"back\")")]
    UnknownSide(String),

    /// Scale must be a finite number greater than zero.
    #[error("invalid scale {0}: must be finite and greater than zero")]
    InvalidScale(f64),

    /// Highlight argument not in `slug=color` form.
    #[error("invalid highlight {0:?}: expected slug=color")]
    InvalidHighlight(String),

    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type for body-highlighter operations.
pub type Result<T> = std::result::Result<T, Error>;
