//! Schema bindings: what a custom object looks like on the server, captured
//! locally so its data records can be decoded and encoded.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};
use crate::schema::{scalar_to_string, FieldSchemaMap};

/// A custom object definition reduced to what record mapping needs.
///
/// Bindings are usually built by introspecting the server
/// ([`SchemaBinding::from_custom_object`]) and can be persisted as JSON and
/// loaded back without another round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BindingRepr")]
pub struct SchemaBinding {
    type_name: String,
    object_name: String,
    parent_id: String,
    fields: FieldSchemaMap,
    meta_fields: Vec<String>,
}

#[derive(Deserialize)]
struct BindingRepr {
    type_name: String,
    object_name: String,
    parent_id: String,
    fields: FieldSchemaMap,
    #[serde(default)]
    meta_fields: Vec<String>,
}

impl TryFrom<BindingRepr> for SchemaBinding {
    type Error = Error;

    fn try_from(repr: BindingRepr) -> Result<Self> {
        SchemaBinding::new(
            repr.type_name,
            repr.object_name,
            repr.parent_id,
            repr.fields,
            repr.meta_fields,
        )
    }
}

impl SchemaBinding {
    /// Assemble a binding from its parts.
    pub fn new(
        type_name: impl Into<String>,
        object_name: impl Into<String>,
        parent_id: impl Into<String>,
        fields: FieldSchemaMap,
        meta_fields: Vec<String>,
    ) -> Result<Self> {
        let type_name = type_name.into();
        let parent_id = parent_id.into();
        if type_name.is_empty() {
            return Err(Error::new(ErrorKind::InvalidSchema(
                "type name must not be empty".to_string(),
            )));
        }
        if parent_id.is_empty() {
            return Err(Error::new(ErrorKind::InvalidSchema(
                "parent id must not be empty".to_string(),
            )));
        }
        Ok(Self {
            fields: fields.with_label(type_name.clone()),
            type_name,
            object_name: object_name.into(),
            parent_id,
            meta_fields,
        })
    }

    /// Build a binding from a custom object description
    /// (`GET assets/customObject/{id}?depth=complete`).
    ///
    /// Every entry of the `fields` list contributes its `id` and
    /// `internalName`. The other top-level keys are recorded as meta fields.
    /// `type_name` defaults to the custom object's own name.
    pub fn from_custom_object(body: &Value, type_name: Option<&str>) -> Result<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| Error::decode("custom object description is not a JSON object"))?;

        let object_name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::decode("custom object description has no name"))?;
        let parent_id = object
            .get("id")
            .and_then(scalar_to_string)
            .ok_or_else(|| Error::decode("custom object description has no id"))?;
        let definitions = object
            .get("fields")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::decode("custom object description has no fields list"))?;

        let mut entries = Vec::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            let id = definition.get("id").and_then(scalar_to_string);
            let name = definition.get("internalName").and_then(Value::as_str);
            match (id, name) {
                (Some(id), Some(name)) => entries.push((id, name.to_string())),
                _ => {
                    return Err(Error::decode(format!(
                        "field definition {index} needs an id and an internalName"
                    )))
                }
            }
        }

        let meta_fields = object
            .keys()
            .filter(|key| key.as_str() != "fields")
            .cloned()
            .collect();

        Self::new(
            type_name.unwrap_or(object_name),
            object_name,
            parent_id,
            FieldSchemaMap::new(entries)?,
            meta_fields,
        )
    }

    /// Load a binding saved with [`to_json_pretty`](Self::to_json_pretty).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Pretty JSON suitable for checking into a repository.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Local name for records of this custom object.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The custom object's name on the server.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// The custom object's id; data instances live under it.
    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn fields(&self) -> &FieldSchemaMap {
        &self.fields
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.names().collect()
    }

    /// Top-level keys of the introspected description, other than `fields`.
    pub fn meta_fields(&self) -> &[String] {
        &self.meta_fields
    }
}

/// Shared handle to a [`SchemaBinding`].
///
/// Cloning is cheap; every record decoded for one custom object points at
/// the same binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomObjectModel {
    binding: Arc<SchemaBinding>,
}

impl CustomObjectModel {
    pub fn new(binding: SchemaBinding) -> Self {
        Self {
            binding: Arc::new(binding),
        }
    }

    pub fn binding(&self) -> &SchemaBinding {
        &self.binding
    }

    /// Returns true if both handles share one binding.
    pub fn same_as(&self, other: &CustomObjectModel) -> bool {
        Arc::ptr_eq(&self.binding, &other.binding)
    }
}

impl From<SchemaBinding> for CustomObjectModel {
    fn from(binding: SchemaBinding) -> Self {
        Self::new(binding)
    }
}

impl std::ops::Deref for CustomObjectModel {
    type Target = SchemaBinding;

    fn deref(&self) -> &SchemaBinding {
        &self.binding
    }
}
