//! # eloqua-api
//!
//! An Oracle Eloqua REST API client library for Rust.
//!
//! Assets (forms, emails, landing pages, custom object definitions) map to
//! fixed-shape records. Custom object data maps to records bound to a field
//! schema introspected from the server, so field ids never leak into calling
//! code.
//!
//! ## Security
//!
//! - Passwords are redacted in Debug output
//! - Tracing skips credential parameters and request bodies
//!
//! ## Crates
//!
//! - **eloqua-client** - HTTP transport: basic auth, compression, status dispatch
//! - **eloqua-auth** - Credentials and base URL discovery
//! - **eloqua-rest** - Assets, custom object data, introspection, code generation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eloqua_api::{CustomObjectLookup, EloquaCredentials, EloquaRestClient, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // ELOQUA_COMPANY, ELOQUA_USERNAME, ELOQUA_PASSWORD
//!     let creds = EloquaCredentials::from_env()?;
//!     let client = EloquaRestClient::connect(&creds).await?;
//!
//!     let dog_owner = client
//!         .custom_object_model(&CustomObjectLookup::Name("DogOwner".into()), None)
//!         .await?;
//!
//!     let page = client.get_list(&dog_owner, None).await?;
//!     for record in page {
//!         println!("{:?} {:?}", record.id(), record.get("Breed")?);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use eloqua_auth as auth;
#[cfg(feature = "client")]
pub use eloqua_client as client;
#[cfg(feature = "rest")]
pub use eloqua_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use eloqua_auth::EloquaCredentials;
#[cfg(feature = "client")]
pub use eloqua_client::{ClientConfig, EloquaClient};
#[cfg(feature = "rest")]
pub use eloqua_rest::{
    Asset, AssetKind, CustomObjectLookup, CustomObjectModel, CustomObjectRecord,
    EloquaRestClient, Record, RecordType, SchemaBinding,
};
