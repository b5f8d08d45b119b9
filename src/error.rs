//! Error types for Shipyard
//!
//! Library code returns `ShipyardError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Shipyard operations
pub type ShipyardResult<T> = Result<T, ShipyardError>;

/// Main error type for Shipyard operations
#[derive(Error, Debug)]
pub enum ShipyardError {
    /// Deployment parameters that cannot be rendered at all
    #[error("invalid deployment spec: {message}")]
    InvalidSpec { message: String },

    /// Unparsable configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// An artifact document could not be serialized
    #[error("failed to render {artifact}: {message}")]
    Render { artifact: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
