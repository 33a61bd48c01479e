//! Error types for eloqua-auth.
//!
//! Error messages are designed to avoid exposing credential data.

/// Result type alias for eloqua-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for eloqua-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The login endpoint did not accept the credentials or did not report
    /// a base URL.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// HTTP error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<eloqua_client::Error> for Error {
    fn from(err: eloqua_client::Error) -> Self {
        let kind = match &err.kind {
            eloqua_client::ErrorKind::RequestRejected { status: 401, .. }
            | eloqua_client::ErrorKind::RequestRejected { status: 403, .. } => {
                ErrorKind::Authentication(format!(
                    "login rejected with status {}",
                    err.status().unwrap_or_default()
                ))
            }
            _ => ErrorKind::Http(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}
