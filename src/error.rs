//! Error types for parameter handling
//!
//! A single error enum covers every user-facing failure in this crate. The
//! core conversion paths only fail on registry lookups; the remaining
//! variants come from configuration loading and tag parsing.

use crate::types::AlgorithmId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for parameter operations
#[derive(Error, Debug)]
pub enum ParamsError {
    /// No definition is registered for the requested algorithm tag
    #[error(
        "Unknown index algorithm '{id}'\nSuggestion: Check registered algorithms with 'annparams algorithms' or register a definition for this tag"
    )]
    UnknownAlgorithm { id: AlgorithmId },

    /// A definition produced parameters for a different algorithm
    #[error(
        "Definition registered for '{expected}' produced parameters for '{found}'\nSuggestion: The definition's create_params() must return its own algorithm"
    )]
    DefinitionMismatch {
        expected: AlgorithmId,
        found: AlgorithmId,
    },

    /// A tag or knob could not be parsed
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Free-form message
    #[error("{0}")]
    General(String),
}

impl ParamsError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::UnknownAlgorithm { .. } => "UNKNOWN_ALGORITHM",
            Self::DefinitionMismatch { .. } => "DEFINITION_MISMATCH",
            Self::InvalidValue { .. } => "INVALID_VALUE",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::UnknownAlgorithm { .. } => vec![
                "Use one of: linear, kdtree, kmeans, composite, saved, autotuned",
                "If the tag came from a foreign caller, check that the record was initialized",
            ],
            Self::InvalidValue { .. } => vec![
                "Tags accept a name (case-insensitive) or an integer value",
            ],
            Self::Config { .. } => vec![
                "Run 'annparams init --force' to regenerate .annparams/settings.toml",
                "Check ANN_* environment variables for typos",
            ],
            Self::FileWrite { .. } => vec![
                "Check that the directory exists and you have write permissions",
            ],
            _ => vec![],
        }
    }
}

impl From<&str> for ParamsError {
    fn from(message: &str) -> Self {
        Self::General(message.to_string())
    }
}

impl From<String> for ParamsError {
    fn from(message: String) -> Self {
        Self::General(message)
    }
}

/// Result type alias for parameter operations
pub type ParamsResult<T> = Result<T, ParamsError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, msg: &str) -> Result<T, ParamsError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: &str) -> Result<T, ParamsError> {
        self.map_err(|e| ParamsError::General(format!("{msg}: {e}")))
    }
}
