//! Fixed-shape assets: forms, emails, landing pages and custom object
//! definitions.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::page::Page;
use crate::record::{encoded_id, require_id, Operation, Record, RecordType, REST_PREFIX};
use crate::schema::scalar_to_string;

/// Kinds of asset the client knows the paths for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Form,
    Email,
    LandingPage,
    CustomObject,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Form,
        AssetKind::Email,
        AssetKind::LandingPage,
        AssetKind::CustomObject,
    ];

    /// The `type` tag Eloqua puts on assets of this kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            AssetKind::Form => "Form",
            AssetKind::Email => "Email",
            AssetKind::LandingPage => "LandingPage",
            AssetKind::CustomObject => "CustomObject",
        }
    }

    fn segment(&self) -> &'static str {
        match self {
            AssetKind::Form => "form",
            AssetKind::Email => "email",
            AssetKind::LandingPage => "landingPage",
            AssetKind::CustomObject => "customObject",
        }
    }

    /// An empty asset of this kind, ready to be filled in and created.
    pub fn new_asset(&self) -> Asset {
        Asset::new(*self)
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_tag())
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssetKind::ALL
            .into_iter()
            .find(|kind| kind.type_tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_usage(format!("Unknown asset kind {s}")))
    }
}

impl RecordType for AssetKind {
    type Record = Asset;

    fn path(&self, operation: Operation, id: Option<&str>) -> Result<String> {
        let segment = self.segment();
        Ok(if operation == Operation::List {
            format!("{REST_PREFIX}/assets/{segment}s")
        } else if operation.targets_instance() {
            format!("{REST_PREFIX}/assets/{segment}/{}", encoded_id(operation, id)?)
        } else {
            format!("{REST_PREFIX}/assets/{segment}")
        })
    }

    fn decode(&self, body: Value) -> Result<Asset> {
        Asset::decode(*self, body)
    }
}

/// An asset as last seen from the server, plus local edits.
///
/// The well-known keys get typed accessors; everything else stays in the raw
/// payload, readable and writable with [`raw_value`](Self::raw_value) and
/// [`set_raw`](Self::set_raw).
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    kind: AssetKind,
    id: Option<String>,
    name: Option<String>,
    asset_type: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    updated_by: Option<String>,
    depth: Option<String>,
    description: Option<String>,
    raw: Map<String, Value>,
}

impl Asset {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
            asset_type: None,
            created_at: None,
            updated_at: None,
            updated_by: None,
            depth: None,
            description: None,
            raw: Map::new(),
        }
    }

    /// Decode a single asset body.
    pub fn decode(kind: AssetKind, body: Value) -> Result<Self> {
        let raw = match body {
            Value::Object(map) => map,
            other => {
                return Err(Error::decode(format!(
                    "{kind} body is not a JSON object: {other}"
                )))
            }
        };

        let text = |key: &str| raw.get(key).and_then(scalar_to_string);
        let mut asset = Self::new(kind);
        asset.id = text("id");
        asset.name = text("name");
        asset.asset_type = text("type");
        asset.created_at = text("createdAt");
        asset.updated_at = text("updatedAt");
        asset.updated_by = text("updatedBy");
        asset.depth = text("depth");
        asset.description = text("description");
        asset.raw = raw;
        Ok(asset)
    }

    /// Decode a list envelope of assets.
    pub fn decode_list(kind: AssetKind, body: Value) -> Result<Page<Self>> {
        kind.decode_list(body)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The `type` reported by the server.
    pub fn asset_type(&self) -> Option<&str> {
        self.asset_type.as_deref()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    pub fn depth(&self) -> Option<&str> {
        self.depth.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The last payload seen from the server.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// One key of the raw payload, e.g. `folderId`.
    pub fn raw_value(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Overwrite one key of the raw payload; it is sent on create and update.
    pub fn set_raw(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.raw.insert(key.into(), value.into());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Point this asset at an existing server record.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    fn create_map(&self) -> Map<String, Value> {
        let mut body = self.raw.clone();
        if let Some(name) = &self.name {
            body.insert("name".into(), Value::String(name.clone()));
        }
        if let Some(description) = &self.description {
            body.insert("description".into(), Value::String(description.clone()));
        }
        body
    }
}

impl Record for Asset {
    type Type = AssetKind;

    fn record_type(&self) -> AssetKind {
        self.kind
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_create_json(&self) -> Value {
        Value::Object(self.create_map())
    }

    fn to_update_json(&self) -> Result<Value> {
        let id = require_id(self.id.as_deref())?;
        let mut body = self.create_map();
        body.insert("id".into(), Value::String(id.to_string()));
        let type_tag = self
            .asset_type
            .clone()
            .unwrap_or_else(|| self.kind.type_tag().to_string());
        body.insert("type".into(), Value::String(type_tag));
        Ok(Value::Object(body))
    }
}
