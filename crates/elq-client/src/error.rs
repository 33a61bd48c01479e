//! Transport errors.

pub type Result<T> = std::result::Result<T, Error>;

/// A failed request, with the underlying reqwest/serde error when there is one.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// The record or asset addressed by the URL does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    /// HTTP status, for errors produced by status dispatch.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::NotFound { .. } => Some(404),
            ErrorKind::RequestRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ErrorKind {
    /// HTTP 404.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Any other non-success response. `body` is the literal response body
    /// (or a hint when Eloqua sent an empty 400).
    #[error("Request rejected: {url} returned {status}\n{body}")]
    RequestRejected {
        url: String,
        status: u16,
        body: String,
    },

    /// e.g. an unsupported method name.
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    #[error("Timed out waiting for Eloqua")]
    Timeout,

    #[error("Could not reach Eloqua: {0}")]
    Connection(String),

    /// A body that is not the JSON we expected.
    #[error("Unexpected JSON: {0}")]
    Json(String),

    /// Bad base URL or an unbuildable reqwest client.
    #[error("Bad client configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("base URL is not a URL: {err}")), err)
    }
}
