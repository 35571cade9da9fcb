//! Domain error types for mention-picker
//!
//! Provides structured error types for different domains:
//! - `SettingsError` for the settings store
//! - `CatalogError` for loading the provider catalog
//! - `PickerError` as the top-level error type of the application

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for mention-picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors raised by a settings store
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file {0}: {1}")]
    Io(PathBuf, std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings file {0} does not contain a JSON object")]
    Malformed(PathBuf),
}

/// Errors raised while loading the provider catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {0}: {1}")]
    Io(PathBuf, std::io::Error),

    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

/// Result type alias for SettingsError
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Result type alias for CatalogError
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
