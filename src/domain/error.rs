//! Error types for the vagas engine.
//!
//! This module defines the centralized error type [`VagasError`] and a type alias
//! [`Result`] used at the outer edges of the crate (catalog loading, configuration
//! files, themes). The query, pagination, modal and form engines never fail: they
//! degrade to empty states or documented fallback values instead.

use thiserror::Error;

/// The main error type for vagas operations.
///
/// # Examples
///
/// ```
/// use vagas::VagasError;
///
/// fn read_catalog() -> Result<(), VagasError> {
///     Err(VagasError::Catalog("duplicate id: vaga-1".to_string()))
/// }
///
/// assert!(read_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum VagasError {
    /// The listing catalog could not be turned into records.
    ///
    /// Raised for structural problems such as duplicate identifiers. Individual
    /// malformed attributes never raise this; they fall back to defaults.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document (catalog or payload) could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for vagas operations.
pub type Result<T> = std::result::Result<T, VagasError>;
