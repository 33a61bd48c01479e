//! Error types for eloqua-rest.

/// Result type alias for eloqua-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for eloqua-rest operations.
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

    /// The innermost kind, looking through list element wrappers.
    pub fn root_kind(&self) -> &ErrorKind {
        self.kind.root()
    }

    /// Returns true if a payload referenced a field the binding does not know.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::SchemaMismatch { .. })
    }

    /// Returns true if the remote resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    pub(crate) fn invalid_usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUsage(message.into()))
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode(message.into()))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The login endpoint refused the credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The remote resource does not exist.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Eloqua answered with a non-success status.
    #[error("Request rejected: {url} returned {status}\n{body}")]
    RequestRejected {
        url: String,
        status: u16,
        body: String,
    },

    /// The call cannot be made as asked (missing id, unknown method, ...).
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// A payload or caller referenced a field the binding does not contain.
    #[error(
        "Field {field:?} is not part of the {schema} schema; regenerate the binding if the custom object changed"
    )]
    SchemaMismatch { schema: String, field: String },

    /// A schema map or binding could not be built.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// One element of a list response failed to decode.
    #[error("Element {index} of list response: {inner}")]
    ListElement {
        index: usize,
        inner: Box<ErrorKind>,
    },

    /// Generated source did not parse.
    #[error("Code generation failed: {0}")]
    Codegen(String),

    /// Transport error from the HTTP layer.
    #[error("Client error: {0}")]
    Client(String),
}

impl ErrorKind {
    /// The innermost kind, looking through list element wrappers.
    pub fn root(&self) -> &ErrorKind {
        match self {
            ErrorKind::ListElement { inner, .. } => inner.root(),
            other => other,
        }
    }
}

impl From<eloqua_client::Error> for Error {
    fn from(err: eloqua_client::Error) -> Self {
        let kind = match &err.kind {
            eloqua_client::ErrorKind::NotFound { url } => ErrorKind::NotFound { url: url.clone() },
            eloqua_client::ErrorKind::RequestRejected { url, status, body } => {
                ErrorKind::RequestRejected {
                    url: url.clone(),
                    status: *status,
                    body: body.clone(),
                }
            }
            eloqua_client::ErrorKind::InvalidUsage(message) => {
                ErrorKind::InvalidUsage(message.clone())
            }
            _ => ErrorKind::Client(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<eloqua_auth::Error> for Error {
    fn from(err: eloqua_auth::Error) -> Self {
        let kind = match &err.kind {
            eloqua_auth::ErrorKind::Authentication(message) => {
                ErrorKind::Authentication(message.clone())
            }
            eloqua_auth::ErrorKind::InvalidCredentials(_) | eloqua_auth::ErrorKind::EnvVar(_) => {
                ErrorKind::InvalidUsage(err.to_string())
            }
            _ => ErrorKind::Client(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}
