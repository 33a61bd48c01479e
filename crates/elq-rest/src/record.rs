//! The two traits the REST client dispatches on.
//!
//! A [`RecordType`] knows where its records live and how to decode them; a
//! [`Record`] knows how to encode itself for create and update. Assets
//! ([`AssetKind`](crate::AssetKind) / [`Asset`](crate::Asset)) and custom
//! object data ([`CustomObjectModel`](crate::CustomObjectModel) /
//! [`CustomObjectRecord`](crate::CustomObjectRecord)) implement both.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::page::Page;

/// Common prefix of every REST 2.0 path.
pub const REST_PREFIX: &str = "/api/REST/2.0";

/// A CRUD operation, used to pick the path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
    List,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }

    /// Returns true if the path names a single existing record.
    pub fn targets_instance(&self) -> bool {
        matches!(self, Operation::Get | Operation::Update | Operation::Delete)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something records can be fetched, listed and created as.
pub trait RecordType {
    /// The record this type decodes to.
    type Record: Record;

    /// Path (below the base URL) for `operation`.
    ///
    /// `id` is required for get, update and delete and is URL-encoded before
    /// it is substituted.
    fn path(&self, operation: Operation, id: Option<&str>) -> Result<String>;

    /// Decode one record from a response body.
    fn decode(&self, body: Value) -> Result<Self::Record>;

    /// Query parameters always sent with `operation`. Caller parameters win
    /// on conflict.
    fn default_params(&self, _operation: Operation) -> Map<String, Value> {
        Map::new()
    }

    /// Decode a list envelope. Stops at the first element that fails.
    fn decode_list(&self, body: Value) -> Result<Page<Self::Record>> {
        Page::decode_with(body, |element| self.decode(element))
    }
}

/// A local record that can be sent to Eloqua.
pub trait Record {
    /// The type this record belongs to.
    type Type: RecordType<Record = Self>;

    /// Handle to this record's type, for path building and decoding.
    fn record_type(&self) -> Self::Type;

    /// Server-assigned id, if the record has one.
    fn id(&self) -> Option<&str>;

    /// Body for `POST`: only what the caller has set.
    fn to_create_json(&self) -> Value;

    /// Body for `PUT`: the last payload seen from the server with local
    /// changes and identity laid on top.
    fn to_update_json(&self) -> Result<Value>;
}

/// URL-encode `id` for an instance path, rejecting a missing or empty id.
pub(crate) fn encoded_id(operation: Operation, id: Option<&str>) -> Result<String> {
    match id {
        Some(id) if !id.is_empty() => Ok(urlencoding::encode(id).into_owned()),
        _ => Err(Error::invalid_usage(format!(
            "{operation} needs a record id"
        ))),
    }
}

/// Shared update-body check: a record without an id cannot be updated.
pub(crate) fn require_id(id: Option<&str>) -> Result<&str> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(Error::invalid_usage(
            "cannot update a record that has no id; create it first",
        )),
    }
}
