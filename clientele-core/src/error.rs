/// Structured error types for the clientele-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (clientele-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for clientele-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// TOML parsing failed
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for clientele-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a parse error with the offending path
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
