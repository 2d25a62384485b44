/// Centralized error types for doc-tree using thiserror
///
/// Only a missing or invalid corpus root aborts a run; every other variant is
/// caught at the directory or file boundary, logged, and degraded locally.
use thiserror::Error;

/// Main error type for the document tree builder
#[derive(Error, Debug)]
pub enum DocTreeError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tree file error: {0}")]
    TreeFile(#[from] TreeFileError),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while walking the corpus directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Document root does not exist: {0}")]
    RootNotFound(String),

    #[error("Document root is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to read directory '{dir}': {reason}")]
    ReadDirFailed { dir: String, reason: String },
}

/// Errors raised while reading a single document
///
/// Never fatal: extraction logs these and falls back to the filename title or
/// an empty excerpt.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read file '{file}': {reason}")]
    ReadFailed { file: String, reason: String },

    #[error("Unsupported document type: {0}")]
    UnsupportedExtension(String),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

/// Errors related to the persisted tree and search index files
#[derive(Error, Debug)]
pub enum TreeFileError {
    #[error("Failed to read '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse '{path}': {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Failed to write '{path}': {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Failed to serialize output: {0}")]
    SerializeFailed(String),
}

impl From<anyhow::Error> for DocTreeError {
    fn from(err: anyhow::Error) -> Self {
        DocTreeError::Other(format!("{:#}", err))
    }
}

impl DocTreeError {
    /// Create a new error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        DocTreeError::Other(msg.into())
    }

    /// Check if this is a user error (bad root, bad config) vs system error
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DocTreeError::Scan(ScanError::RootNotFound(_) | ScanError::NotADirectory(_))
                | DocTreeError::Config(ConfigError::InvalidValue { .. })
        )
    }
}
