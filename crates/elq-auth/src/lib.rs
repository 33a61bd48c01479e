//! # eloqua-auth
//!
//! Eloqua authentication: basic-auth credentials and instance discovery.
//!
//! ## Security
//!
//! - Passwords are redacted in Debug output
//! - Tracing skips credential parameters
//!
//! ## How login works
//!
//! Eloqua authenticates every call with HTTP basic auth using the login
//! `"<company>\<username>"`. Each tenant lives on its own pod, so before the
//! first API call the client asks the shared login endpoint
//! (`https://login.eloqua.com/id`) for the tenant's base URL. Callers that
//! already know the base URL can skip that round trip.
//!
//! ## Example
//!
//! ```rust,ignore
//! use eloqua_auth::EloquaCredentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), eloqua_auth::Error> {
//!     // From environment variables
//!     let creds = EloquaCredentials::from_env()?;
//!
//!     // Resolves the base URL unless the credentials already carry one
//!     let client = creds.connect().await?;
//!     println!("connected to {}", client.base_url());
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod login;

pub use credentials::EloquaCredentials;
pub use error::{Error, ErrorKind, Result};
pub use login::{discover_base_url, LoginInfo};

/// Shared login endpoint that reports a tenant's base URL.
pub const DEFAULT_LOGIN_URL: &str = "https://login.eloqua.com/id";
