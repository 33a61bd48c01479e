//! The raw transport: one reqwest client, status dispatch on every response.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::{Response, ResponseExt};

/// Pooled HTTP transport shared by everything that talks to Eloqua.
///
/// A response with a non-2xx status never reaches the caller: it is turned
/// into [`ErrorKind::NotFound`] or [`ErrorKind::RequestRejected`] first.
#[derive(Debug, Clone)]
pub struct ElqHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl ElqHttpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.idle_timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.gzip)
            .deflate(config.gzip)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, url)
    }

    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Send `request` once and dispatch on the status.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.send(&request).await?;
        response.check_eloqua_error().await
    }

    async fn send(&self, request: &RequestBuilder) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        if let Some((user, password)) = &request.basic_auth {
            req = req.basic_auth(user, Some(password));
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        if self.config.log_requests {
            debug!(
                query = request.query_params.len(),
                has_body = request.body.is_some(),
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.log_requests {
            let status = response.status().as_u16();
            if response.status().is_success() {
                debug!(status, "Response received");
            } else {
                info!(status, "Eloqua returned an error status");
            }
        }

        Ok(Response::new(response))
    }

    /// [`execute`](Self::execute), then decode the body as `T`.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        self.execute(request).await?.json().await
    }
}
