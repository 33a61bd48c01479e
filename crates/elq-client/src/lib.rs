//! # eloqua-client
//!
//! Core HTTP client infrastructure for the Eloqua REST API.
//!
//! This crate provides the foundational HTTP client with:
//! - HTTP basic authentication (`company\username`)
//! - Compression support (gzip, deflate)
//! - Status-code dispatch into typed errors
//! - Request/response tracing
//!
//! Requests are issued exactly once. There is no retry layer: every
//! failure is surfaced to the caller immediately.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (eloqua-rest: assets, custom object data, introspection)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     EloquaClient                            │
//! │  - Holds base URL + login credentials                       │
//! │  - Provides typed JSON methods (get_json, post_json, etc.)  │
//! │  - Adds basic auth to every request                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ElqHttpClient                            │
//! │  - Raw HTTP, gzip, request logging                          │
//! │  - Status dispatch (404, 400, other non-2xx)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use eloqua_client::EloquaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), eloqua_client::Error> {
//!     let client = EloquaClient::new(
//!         "https://secure.p01.eloqua.com",
//!         "AcmeCorp\\jane.doe",
//!         "hunter2",
//!     )?;
//!
//!     let forms: serde_json::Value = client
//!         .get_json("/api/REST/2.0/assets/forms", &[("count", "10")])
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod eloqua_client;
mod error;
mod request;
mod response;

pub use client::ElqHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use eloqua_client::EloquaClient;
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt, EMPTY_BAD_REQUEST_HINT};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("eloqua-api/", env!("CARGO_PKG_VERSION"));
