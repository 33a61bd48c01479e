//! Base URL discovery through the shared login endpoint.

use eloqua_client::{ClientConfig, ElqHttpClient};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::credentials::EloquaCredentials;
use crate::error::{Error, ErrorKind, Result};

/// What the login endpoint reports about an authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInfo {
    /// Root URL of the tenant's pod, e.g. `https://secure.p01.eloqua.com`.
    pub base_url: String,
    /// The `site` block, kept as returned.
    pub site: serde_json::Value,
    /// The `user` block, kept as returned.
    pub user: serde_json::Value,
}

#[derive(Deserialize)]
struct RawLoginInfo {
    #[serde(default)]
    site: serde_json::Value,
    #[serde(default)]
    user: serde_json::Value,
    urls: Option<RawUrls>,
}

#[derive(Deserialize)]
struct RawUrls {
    base: Option<String>,
}

impl LoginInfo {
    fn from_body(body: serde_json::Value) -> Result<Self> {
        // An unauthenticated call still answers 200, with a bare JSON string.
        if let Some(message) = body.as_str() {
            return Err(Error::new(ErrorKind::Authentication(message.to_string())));
        }

        let raw: RawLoginInfo = serde_json::from_value(body)?;
        let base_url = raw
            .urls
            .and_then(|urls| urls.base)
            .filter(|base| !base.is_empty())
            .ok_or_else(|| {
                Error::new(ErrorKind::Authentication(
                    "login response did not include urls.base".to_string(),
                ))
            })?;

        Ok(Self {
            base_url,
            site: raw.site,
            user: raw.user,
        })
    }
}

/// Ask the login endpoint where the tenant lives.
#[instrument(skip(creds, config), fields(login_url = %creds.login_url()))]
pub async fn discover_base_url(
    creds: &EloquaCredentials,
    config: ClientConfig,
) -> Result<LoginInfo> {
    let http = ElqHttpClient::new(config)?;
    let request = http
        .get(creds.login_url())
        .basic_auth(creds.login(), creds.password())
        .accept_json();

    let body: serde_json::Value = http.send_json(request).await?;
    let info = LoginInfo::from_body(body)?;
    debug!(base_url = %info.base_url, "Resolved Eloqua base URL");
    Ok(info)
}
