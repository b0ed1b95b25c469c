use thiserror::Error;

/// Unified error type for next-tag operations
#[derive(Error, Debug)]
pub enum NextTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version file error: {0}")]
    VersionFile(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in next-tag
pub type Result<T> = std::result::Result<T, NextTagError>;

impl NextTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextTagError::Config(msg.into())
    }

    /// Create a version file error with context
    pub fn version_file(msg: impl Into<String>) -> Self {
        NextTagError::VersionFile(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        NextTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        NextTagError::Remote(msg.into())
    }

    /// Create a step output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        NextTagError::Output(msg.into())
    }
}
