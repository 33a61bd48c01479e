//! HTTP response handling with Eloqua-specific status dispatch.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Substituted for the body of a 400 response that came back empty.
///
/// Eloqua answers malformed custom object data writes with a bare 400, most
/// often because a field value has the wrong data type.
pub const EMPTY_BAD_REQUEST_HINT: &str = "\
    !!!! No content in the error response from Eloqua !!!!
    If you are creating custom object data, this is usually a field with the
    wrong data type (date, number). Eloqua does not say which one.

    Helpful hints:
        - Dates must be integer unix timestamps, e.g. `chrono::Utc::now().timestamp()`
";

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// The final URL of the request, query string included.
    pub fn url(&self) -> &str {
        self.inner.url().as_str()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let text = self.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Parse the body as JSON, mapping an empty body to `null`.
    ///
    /// Eloqua answers DELETE (and some PUTs) with an empty 200.
    pub async fn json_or_null(self) -> Result<serde_json::Value> {
        let text = self.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Get access to the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

/// Extension trait for processing Eloqua API responses.
pub trait ResponseExt {
    /// Turn a non-success response into the matching error.
    fn check_eloqua_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_eloqua_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let url = self.url().to_string();
        let body = self.text().await.unwrap_or_default();
        Err(error_for_status(url, status, body))
    }
}

/// Map a non-success status to an error kind.
///
/// - 404 becomes `NotFound`
/// - an empty 400 becomes `RequestRejected` carrying [`EMPTY_BAD_REQUEST_HINT`]
/// - everything else becomes `RequestRejected` with the literal body
pub(crate) fn error_for_status(url: String, status: u16, body: String) -> Error {
    let kind = match status {
        404 => ErrorKind::NotFound { url },
        400 if body.trim().is_empty() => ErrorKind::RequestRejected {
            url,
            status,
            body: EMPTY_BAD_REQUEST_HINT.to_string(),
        },
        _ => ErrorKind::RequestRejected { url, status, body },
    };
    Error::new(kind)
}
