//! Error types for shipfolder.
//!
//! Pipeline-facing variants display the remote-supplied message unchanged,
//! so a failed run can carry `err.to_string()` straight into
//! [`PipelineState::Failed`](crate::pipeline::PipelineState::Failed).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for shipfolder operations.
#[derive(Error, Debug)]
pub enum ShipfolderError {
    // Input validation: never reaches the network
    #[error("{0}")]
    Validation(String),

    #[error("a deployment is already in progress or awaiting reset")]
    PipelineBusy,

    // Directory traversal
    #[error("Failed to read {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Remote pipeline steps
    #[error("{0}")]
    RepoCreation(String),

    #[error("Failed to upload {path}")]
    FileUpload { path: String },

    #[error("{0}")]
    Deploy(String),

    // Configuration and credentials
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Credential store error: {0}")]
    Credentials(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ShipfolderError
pub type Result<T> = std::result::Result<T, ShipfolderError>;

impl ShipfolderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn repo_creation(msg: impl Into<String>) -> Self {
        Self::RepoCreation(msg.into())
    }

    pub fn file_upload(path: impl Into<String>) -> Self {
        Self::FileUpload { path: path.into() }
    }

    pub fn deploy(msg: impl Into<String>) -> Self {
        Self::Deploy(msg.into())
    }

    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }
}

// Generic I/O errors outside of traversal are wrapped in Other
impl From<std::io::Error> for ShipfolderError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

impl From<reqwest::Error> for ShipfolderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::NetworkError(err.to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 | 403 => Self::AuthenticationError(err.to_string()),
                429 => Self::RateLimitExceeded,
                _ => Self::NetworkError(err.to_string()),
            }
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ShipfolderError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}

impl From<octocrab::Error> for ShipfolderError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::NetworkError(format!("GitHub API error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_messages_display_verbatim() {
        let err = ShipfolderError::repo_creation("name already exists");
        assert_eq!(err.to_string(), "name already exists");

        let err = ShipfolderError::deploy("Project not found");
        assert_eq!(err.to_string(), "Project not found");
    }

    #[test]
    fn file_upload_names_the_path() {
        let err = ShipfolderError::file_upload("src/index.js");
        assert_eq!(err.to_string(), "Failed to upload src/index.js");
        assert!(matches!(err, ShipfolderError::FileUpload { .. }));
    }

    #[test]
    fn traversal_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ShipfolderError::traversal("/tmp/site/a.txt", io);
        assert!(err.to_string().contains("/tmp/site/a.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_errors_wrap_into_other() {
        let io = std::io::Error::other("boom");
        let err: ShipfolderError = io.into();
        assert!(matches!(err, ShipfolderError::Other(_)));
    }
}
