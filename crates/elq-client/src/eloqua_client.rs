//! Authenticated Eloqua client with typed HTTP methods.
//!
//! This module provides `EloquaClient`, which combines the resolved base URL
//! and basic-auth login with an HTTP client.
//!
//! ## Security
//!
//! - The password is redacted in Debug output
//! - Request payloads are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::ElqHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// High-level Eloqua API client.
///
/// Holds the instance base URL (as returned by the login endpoint) and the
/// basic-auth login. Higher-level crates build paths and hand them here.
///
/// # Example
///
/// ```rust,ignore
/// use eloqua_client::EloquaClient;
///
/// let client = EloquaClient::new("https://secure.p01.eloqua.com", "Acme\\jane", "pw")?;
///
/// let form: serde_json::Value = client
///     .get_json("/api/REST/2.0/assets/form/42", &[])
///     .await?;
/// ```
#[derive(Clone)]
pub struct EloquaClient {
    http: ElqHttpClient,
    base_url: String,
    login: String,
    password: String,
}

impl std::fmt::Debug for EloquaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EloquaClient")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl EloquaClient {
    /// Create a new client for the given base URL and login
    /// (`"<company>\<username>"`).
    pub fn new(
        base_url: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(base_url, login, password, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = ElqHttpClient::new(config)?;
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            login: login.into(),
            password: password.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the basic-auth login name.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &ElqHttpClient {
        &self.http
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the base URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // =========================================================================
    // Base HTTP Methods (with authentication)
    // =========================================================================

    /// Create a request builder with authentication for any method.
    pub fn request_builder(&self, method: RequestMethod, url: &str) -> RequestBuilder {
        RequestBuilder::new(method, url)
            .basic_auth(&self.login, &self.password)
            .accept_json()
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request_builder(RequestMethod::Get, url)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request_builder(RequestMethod::Post, url)
    }

    /// Create a PUT request builder with authentication.
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request_builder(RequestMethod::Put, url)
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request_builder(RequestMethod::Delete, url)
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    /// Issue a raw request against a path.
    ///
    /// GET and DELETE send the payload (a JSON object) as query parameters;
    /// POST and PUT send it as the JSON body.
    #[instrument(skip(self, payload), fields(path = %path, with_data = payload.is_some()))]
    pub async fn request(
        &self,
        method: RequestMethod,
        path: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let url = self.url(path);
        let mut request = self.request_builder(method, &url);
        if let Some(payload) = payload {
            request = if method.payload_in_query() {
                request.query_object(payload)?
            } else {
                request.json_value(payload.clone())
            };
        }
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with query parameters and JSON response deserialization.
    #[instrument(skip(self, query), fields(url = %path))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.get(&self.url(path)).query_pairs(query.iter().copied());
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %path))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(&self.url(path)).json(body)?;
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// PUT request with JSON body. Returns the parsed body (`null` when empty).
    #[instrument(skip(self, body), fields(url = %path))]
    pub async fn put_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let request = self.put(&self.url(path)).json(body)?;
        let response = self.http.execute(request).await?;
        response.json_or_null().await
    }

    /// DELETE request. Returns the parsed body (`null` when empty).
    #[instrument(skip(self), fields(url = %path))]
    pub async fn delete_request(&self, path: &str) -> Result<serde_json::Value> {
        let request = self.delete(&self.url(path));
        let response = self.http.execute(request).await?;
        response.json_or_null().await
    }
}
