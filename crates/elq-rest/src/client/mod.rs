//! Eloqua REST API client.
//!
//! This client wraps `EloquaClient` from `eloqua-client` and dispatches CRUD
//! calls through the [`RecordType`](crate::RecordType) and
//! [`Record`](crate::Record) traits, so assets and custom object data share
//! one set of methods.

use eloqua_auth::EloquaCredentials;
use eloqua_client::{ClientConfig, EloquaClient};

use crate::error::Result;

mod crud;
mod introspect;

pub use introspect::CustomObjectLookup;

/// Eloqua REST API client.
///
/// Every method is one request; nothing is cached or retried.
///
/// # Example
///
/// ```rust,ignore
/// use eloqua_auth::EloquaCredentials;
/// use eloqua_rest::{AssetKind, CustomObjectLookup, EloquaRestClient};
///
/// let client = EloquaRestClient::connect(&EloquaCredentials::from_env()?).await?;
///
/// // Assets
/// let form = client.get(&AssetKind::Form, "42", None).await?;
///
/// // Custom object data
/// let dog_owner = client
///     .custom_object_model(&CustomObjectLookup::Name("DogOwner".into()), None)
///     .await?;
/// let mut record = dog_owner.new_record();
/// record.set("Breed", "Corgi")?;
/// let created = client.create(&record).await?;
/// client.delete(&created).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EloquaRestClient {
    client: EloquaClient,
}

impl EloquaRestClient {
    /// Create a new REST client for a known base URL.
    pub fn new(base_url: impl Into<String>, credentials: &EloquaCredentials) -> Result<Self> {
        Self::with_config(base_url, credentials, ClientConfig::default())
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        credentials: &EloquaCredentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = credentials
            .clone()
            .with_base_url(base_url)
            .client(config)?;
        Ok(Self { client })
    }

    /// Connect with credentials, asking the login endpoint for the base URL
    /// unless the credentials already carry one.
    pub async fn connect(credentials: &EloquaCredentials) -> Result<Self> {
        Self::connect_with_config(credentials, ClientConfig::default()).await
    }

    /// Same as [`connect`](Self::connect) with custom HTTP configuration.
    pub async fn connect_with_config(
        credentials: &EloquaCredentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = credentials.connect_with_config(config).await?;
        Ok(Self { client })
    }

    /// Create a REST client from an existing EloquaClient.
    pub fn from_client(client: EloquaClient) -> Self {
        Self { client }
    }

    /// Get the underlying EloquaClient.
    pub fn inner(&self) -> &EloquaClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}
