//! Unified error types for riskboard.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for riskboard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RiskboardError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Terminal setup or rendering errors
    #[error("Terminal error: {context}")]
    Terminal {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type for riskboard operations
pub type Result<T> = std::result::Result<T, RiskboardError>;

impl RiskboardError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a terminal error with context
    pub fn terminal(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for RiskboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

/// Extension trait for adding context to IO results.
pub trait ErrorContext<T> {
    /// Attach a path to an IO error.
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;

    /// Wrap an IO error as a terminal failure with context.
    fn terminal_context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| RiskboardError::io(path, e))
    }

    fn terminal_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RiskboardError::terminal(context, e))
    }
}
