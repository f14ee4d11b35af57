//! Error types for the CLI

use sqlchat_core::{CatalogError, SchemaError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::llm::TranslateError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Could not open the database
    #[error("{0}")]
    ConnectionError(String),

    /// Schema introspection failed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A read query failed
    #[error("SQL execution failed: {}", .0.source)]
    Query(#[from] CatalogError),

    /// The language model could not be reached or answered garbage
    #[error("Translation failed: {0}")]
    Translate(#[from] TranslateError),

    /// The binary was built without the driver this dialect needs
    #[error("{dialect} support is not compiled in (rebuild with the `{feature}` feature)")]
    MissingDriver {
        dialect: &'static str,
        feature: &'static str,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
