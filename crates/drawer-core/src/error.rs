//! Error types for drawer-core

use thiserror::Error;

/// Result type alias using drawer-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading drawer configuration and resources.
///
/// Rendering itself is infallible; these only surface at the edges.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Palette color that is not a hex color
    #[error("Invalid color for {role}: {value:?}")]
    InvalidColor { role: &'static str, value: String },

    /// Locale without a string table
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
