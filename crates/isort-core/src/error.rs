//! Error types for isort.

use std::path::PathBuf;

/// Errors raised while resolving algorithms or handling sort data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The algorithm's module could not be located or opened.
    #[error("Algorithm module not found for '{name}': {reason}")]
    ModuleNotFound { name: String, reason: String },

    /// The module was opened but does not export a required symbol.
    #[error("Algorithm module '{name}' is missing entry point '{symbol}'")]
    EntryPointMissing { name: String, symbol: String },

    /// The module factory returned no instance.
    #[error("Algorithm module '{name}' failed to create an instance")]
    FactoryFailed { name: String },

    /// A handle was destroyed through a registry that never resolved its type.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// The algorithm name cannot be turned into a module identifier.
    #[error("Invalid algorithm name: {0:?}")]
    InvalidName(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A data line is not an unsigned 64-bit decimal integer.
    #[error("Invalid value on line {line}: {value:?}")]
    InvalidValue { line: usize, value: String },

    #[error("Failed to access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for isort operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error means the requested algorithm is unavailable.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            Error::ModuleNotFound { .. } | Error::EntryPointMissing { .. } | Error::InvalidName(_)
        )
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }
}
