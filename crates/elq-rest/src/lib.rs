//! # eloqua-rest
//!
//! Eloqua REST 2.0 client: assets, custom object data bound to a live
//! schema, schema introspection and code generation.
//!
//! ## Features
//!
//! - **Assets** - Forms, emails, landing pages and custom object
//!   definitions as fixed-shape records
//! - **Custom object data** - Records whose fields are resolved through a
//!   [`FieldSchemaMap`] built from the server's own description
//! - **Create vs. update** - Create sends only what was set; update lays
//!   local changes over the last payload seen from the server
//! - **Introspection** - Turn a custom object description into a
//!   persistable [`SchemaBinding`]
//! - **Code generation** - Emit a typed Rust wrapper for a binding
//!
//! ## Example
//!
//! ```rust,ignore
//! use eloqua_auth::EloquaCredentials;
//! use eloqua_rest::{AssetKind, CustomObjectLookup, EloquaRestClient, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), eloqua_rest::Error> {
//!     let client = EloquaRestClient::connect(&EloquaCredentials::from_env()?).await?;
//!
//!     // Assets
//!     let mut form = client.get(&AssetKind::Form, "42", None).await?;
//!     form.set_name("Spring signup");
//!     client.update(&form).await?;
//!
//!     // Custom object data
//!     let dog_owner = client
//!         .custom_object_model(&"DogOwner".parse::<CustomObjectLookup>()?, None)
//!         .await?;
//!     let mut rex = dog_owner.new_record();
//!     rex.set("Breed", "Corgi")?;
//!     let rex = client.create(&rex).await?;
//!     println!("created {:?}", rex.id());
//!
//!     Ok(())
//! }
//! ```

mod asset;
mod binding;
mod client;
pub mod codegen;
mod custom_object;
mod error;
mod page;
mod record;
mod schema;

#[cfg(test)]
mod test_support;

// Main client
pub use client::{CustomObjectLookup, EloquaRestClient};

// Records
pub use asset::{Asset, AssetKind};
pub use custom_object::{CustomObjectRecord, CUSTOM_OBJECT_DATA_TYPE};
pub use page::Page;
pub use record::{Operation, Record, RecordType, REST_PREFIX};

// Schema
pub use binding::{CustomObjectModel, SchemaBinding};
pub use schema::FieldSchemaMap;

// Code generation
pub use codegen::{generate_model_source, CodegenOptions};

// Error types
pub use error::{Error, ErrorKind, Result};
