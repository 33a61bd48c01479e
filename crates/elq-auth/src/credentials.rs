//! Basic-auth credentials for an Eloqua tenant.
//!
//! The password is redacted in Debug output.

use eloqua_client::{ClientConfig, EloquaClient};
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::login::discover_base_url;
use crate::DEFAULT_LOGIN_URL;

/// Company, user and password for one Eloqua tenant, plus the tenant's base
/// URL once it is known.
#[derive(Clone)]
pub struct EloquaCredentials {
    company: String,
    username: String,
    password: String,
    base_url: Option<String>,
    login_url: String,
}

impl std::fmt::Debug for EloquaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EloquaCredentials")
            .field("company", &self.company)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("login_url", &self.login_url)
            .finish()
    }
}

impl EloquaCredentials {
    /// Create new credentials with the given values.
    pub fn new(
        company: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            username: username.into(),
            password: password.into(),
            base_url: None,
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }

    /// Use a known base URL and skip discovery.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a different login endpoint for discovery.
    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `ELOQUA_COMPANY`
    /// - `ELOQUA_USERNAME`
    /// - `ELOQUA_PASSWORD`
    ///
    /// Optional:
    /// - `ELOQUA_BASE_URL` (skips discovery)
    /// - `ELOQUA_LOGIN_URL` (default: `https://login.eloqua.com/id`)
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            std::env::var(name).map_err(|e| {
                Error::with_source(ErrorKind::EnvVar(name.to_string()), e)
            })
        };

        let mut creds = Self::new(
            required("ELOQUA_COMPANY")?,
            required("ELOQUA_USERNAME")?,
            required("ELOQUA_PASSWORD")?,
        );

        if let Ok(base_url) = std::env::var("ELOQUA_BASE_URL") {
            creds = creds.with_base_url(base_url);
        }
        if let Ok(login_url) = std::env::var("ELOQUA_LOGIN_URL") {
            creds = creds.with_login_url(login_url);
        }

        Ok(creds)
    }

    /// The company (site) name.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// The user name inside the company.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// The base URL, if known.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The login endpoint used for discovery.
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// The basic-auth login name, `"<company>\<username>"`.
    pub fn login(&self) -> String {
        format!("{}\\{}", self.company, self.username)
    }

    /// Returns true if no part of the login is blank.
    pub fn is_valid(&self) -> bool {
        !self.company.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    /// Build an authenticated client for the known base URL.
    ///
    /// Fails with `InvalidCredentials` if the base URL is not known yet; use
    /// [`connect`](Self::connect) to discover it.
    pub fn client(&self, config: ClientConfig) -> Result<EloquaClient> {
        self.validate()?;
        let base_url = self.base_url.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::InvalidCredentials(
                "base URL is not known; connect() discovers it".to_string(),
            ))
        })?;
        EloquaClient::with_config(base_url, self.login(), &self.password, config)
            .map_err(Into::into)
    }

    /// Build an authenticated client, discovering the base URL first if the
    /// credentials do not carry one.
    pub async fn connect(&self) -> Result<EloquaClient> {
        self.connect_with_config(ClientConfig::default()).await
    }

    /// Same as [`connect`](Self::connect) with custom HTTP configuration.
    #[instrument(skip(self, config), fields(company = %self.company))]
    pub async fn connect_with_config(&self, config: ClientConfig) -> Result<EloquaClient> {
        self.validate()?;
        if self.base_url.is_some() {
            return self.client(config);
        }

        let info = discover_base_url(self, config.clone()).await?;
        self.clone().with_base_url(info.base_url).client(config)
    }

    fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::InvalidCredentials(
                "company, username and password must all be non-empty".to_string(),
            )))
        }
    }
}
