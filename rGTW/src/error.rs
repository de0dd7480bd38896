//! Error types.

use thiserror::Error;

/// The main error type for rGTW operations.
///
/// HTTP error statuses from regular API calls are not errors; they come back
/// as [`Reply::Failure`](crate::Reply::Failure).
#[derive(Debug, Error)]
pub enum Error {
    /// Client was built with missing or unusable settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The token round trip failed.
    ///
    /// `status` is `None` when the token endpoint never answered; `source`
    /// then holds the transport error.
    #[error(
        "Authentication failed{}: {reason}",
        .status.map(|s| format!(" [{s}]")).unwrap_or_default()
    )]
    Authentication {
        status: Option<u16>,
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// No HTTP response was received (connect failure, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid argument passed to an API method.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create an authentication error.
    pub fn auth(status: Option<u16>, reason: impl Into<String>) -> Self {
        Error::Authentication {
            status,
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an authentication error for a token call that got no response.
    pub fn auth_transport(err: reqwest::Error) -> Self {
        Error::Authentication {
            status: None,
            reason: err.to_string(),
            source: Some(err),
        }
    }

    /// Check if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Authentication {
                source: Some(_), ..
            } => true,
            Error::Authentication { status, .. } => status.map_or(false, |s| s >= 500),
            _ => false,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }
}

/// Result type alias for rGTW operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::auth(Some(401), "Unauthorized");
        assert_eq!(format!("{}", e), "Authentication failed [401]: Unauthorized");

        let e = Error::auth(None, "missing organizer_key");
        assert_eq!(format!("{}", e), "Authentication failed: missing organizer_key");
    }

    #[test]
    fn test_retryable() {
        assert!(Error::auth(Some(503), "Service Unavailable").is_retryable());
        assert!(!Error::auth(Some(401), "Unauthorized").is_retryable());
        assert!(!Error::auth(None, "missing organizer_key").is_retryable());
        assert!(!Error::config("username").is_retryable());
    }

    #[test]
    fn test_auth_error() {
        assert!(Error::auth(Some(400), "Bad Request").is_auth_error());
        assert!(!Error::InvalidArgument("webinarKey".into()).is_auth_error());
    }
}
