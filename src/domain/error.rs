use std::io;

use thiserror::Error;

/// Library-wide error type for funcforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// App name is invalid.
    #[error("Invalid app name '{0}': must be non-empty, alphanumeric with hyphens")]
    InvalidAppName(String),

    /// Project directory already exists at the target location.
    #[error("Project directory '{0}' already exists")]
    ProjectExists(String),

    /// Control-plane command failed or was rejected.
    #[error("Control plane error running '{command}': {details}")]
    ControlPlane { command: String, details: String },

    /// Scaffolding tool failed.
    #[error("Scaffold error running '{tool}': {details}")]
    Scaffold { tool: String, details: String },

    /// Manifest could not be parsed or rendered as structured data.
    #[error("Manifest error at '{path}': {details}")]
    Manifest { path: String, details: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
