use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] drawer_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("String key cannot be empty")]
    EmptyStringKey,
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),
}
