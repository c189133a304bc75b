use std::path::PathBuf;
use thiserror::Error;

/// Client-side failures that occur before any request reaches the wire.
#[derive(Debug, Error)]
pub enum SbxError {
    #[error("no account token found. Run 'sbx set-token <token>' or pass --token")]
    MissingCredential,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
