//! Field schema maps.
//!
//! Custom object data travels as `fieldValues: [{id, value}]`, keyed by
//! numeric field ids. A [`FieldSchemaMap`] translates those ids to the
//! field names a caller works with, and back.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, ErrorKind, Result};

const DEFAULT_LABEL: &str = "custom object";

/// Ordered, immutable two-way map between field ids and field names.
///
/// Ids and names are each unique. Order is the order the fields were given
/// in, which is the order data records are encoded in.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldSchemaMap {
    label: String,
    entries: Vec<(String, String)>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl fmt::Debug for FieldSchemaMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchemaMap")
            .field("label", &self.label)
            .field("entries", &self.entries)
            .finish()
    }
}

impl FieldSchemaMap {
    /// Build a map from `(id, name)` pairs.
    ///
    /// Fails with `InvalidSchema` if an id or a name appears twice.
    pub fn new<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self {
            label: DEFAULT_LABEL.to_string(),
            entries: Vec::new(),
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        };

        for (id, name) in entries {
            let (id, name) = (id.into(), name.into());
            if map.by_id.contains_key(&id) {
                return Err(Error::new(ErrorKind::InvalidSchema(format!(
                    "duplicate field id {id:?}"
                ))));
            }
            if map.by_name.contains_key(&name) {
                return Err(Error::new(ErrorKind::InvalidSchema(format!(
                    "duplicate field name {name:?}"
                ))));
            }
            let index = map.entries.len();
            map.by_id.insert(id.clone(), index);
            map.by_name.insert(name.clone(), index);
            map.entries.push((id, name));
        }

        Ok(map)
    }

    /// Name used in `SchemaMismatch` errors.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Name used in `SchemaMismatch` errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Field name for an id.
    pub fn resolve(&self, id: &str) -> Result<&str> {
        self.name_of(id).ok_or_else(|| self.mismatch(id))
    }

    /// Field id for a name.
    pub fn resolve_inverse(&self, name: &str) -> Result<&str> {
        self.id_of(name).ok_or_else(|| self.mismatch(name))
    }

    /// Field name for an id, if known.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(|&i| self.entries[i].1.as_str())
    }

    /// Field id for a name, if known.
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|&i| self.entries[i].0.as_str())
    }

    /// Returns true if `name` is one of the field names.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// `(id, name)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Field ids in schema order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn mismatch(&self, field: &str) -> Error {
        Error::new(ErrorKind::SchemaMismatch {
            schema: self.label.clone(),
            field: field.to_string(),
        })
    }
}

/// Render a JSON scalar the way Eloqua ids are compared: strings as-is,
/// numbers in decimal form.
pub(crate) fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl Serialize for FieldSchemaMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldSchemaMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping field ids to field names")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, name)) = access.next_entry::<String, String>()? {
                    entries.push((id, name));
                }
                Ok(entries)
            }
        }

        let entries = deserializer.deserialize_map(EntriesVisitor)?;
        FieldSchemaMap::new(entries).map_err(serde::de::Error::custom)
    }
}
