//! Error types for feelone-core

use thiserror::Error;

/// Main error type for the feelone-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to render configuration back to TOML
    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias for feelone-core
pub type Result<T> = std::result::Result<T, Error>;
