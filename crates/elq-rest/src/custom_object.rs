//! Custom object data records.
//!
//! A data record's schema fields arrive as
//! `fieldValues: [{"id": "6041", "value": "Corgi"}, ...]`. The record's
//! [`CustomObjectModel`] turns the ids into field names on the way in and
//! back into ids on the way out.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::binding::CustomObjectModel;
use crate::error::{Error, Result};
use crate::page::Page;
use crate::record::{encoded_id, require_id, Operation, Record, RecordType, REST_PREFIX};
use crate::schema::scalar_to_string;

/// `type` tag of every custom object data record.
pub const CUSTOM_OBJECT_DATA_TYPE: &str = "CustomObjectData";

impl CustomObjectModel {
    /// A new, empty record of this custom object.
    pub fn new_record(&self) -> CustomObjectRecord {
        CustomObjectRecord::new(self.clone())
    }
}

impl RecordType for CustomObjectModel {
    type Record = CustomObjectRecord;

    fn path(&self, operation: Operation, id: Option<&str>) -> Result<String> {
        let base = format!(
            "{REST_PREFIX}/data/customObject/{}",
            urlencoding::encode(self.parent_id())
        );
        Ok(if operation == Operation::List {
            format!("{base}/instances")
        } else if operation.targets_instance() {
            format!("{base}/instance/{}", encoded_id(operation, id)?)
        } else {
            format!("{base}/instance")
        })
    }

    fn decode(&self, body: Value) -> Result<CustomObjectRecord> {
        CustomObjectRecord::decode(self.clone(), body)
    }

    fn default_params(&self, operation: Operation) -> Map<String, Value> {
        let mut params = Map::new();
        if operation == Operation::Get {
            params.insert("depth".into(), json!("complete"));
        }
        params
    }
}

/// One data instance of a custom object.
///
/// Field values are kept exactly as received (strings, numbers, ...).
/// A field that was never set, was cleared, or was set to `null` is left out
/// of every outgoing payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomObjectRecord {
    model: CustomObjectModel,
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    meta: Map<String, Value>,
    values: HashMap<String, Value>,
    raw: Map<String, Value>,
}

impl CustomObjectRecord {
    pub fn new(model: CustomObjectModel) -> Self {
        Self {
            model,
            id: None,
            name: None,
            description: None,
            meta: Map::new(),
            values: HashMap::new(),
            raw: Map::new(),
        }
    }

    /// Decode a data record body.
    ///
    /// Every `fieldValues` id must be in the model's schema; an unknown id
    /// fails with `SchemaMismatch` instead of being dropped.
    pub fn decode(model: CustomObjectModel, body: Value) -> Result<Self> {
        let raw = match body {
            Value::Object(map) => map,
            other => {
                return Err(Error::decode(format!(
                    "{} record is not a JSON object: {other}",
                    model.type_name()
                )))
            }
        };

        let entries: &[Value] = match raw.get("fieldValues") {
            None => &[],
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(Error::decode("`fieldValues` is not a list")),
        };

        let mut values = HashMap::with_capacity(entries.len());
        for entry in entries {
            let id = entry
                .get("id")
                .and_then(scalar_to_string)
                .ok_or_else(|| Error::decode(format!("field value without an id: {entry}")))?;
            let name = model.fields().resolve(&id)?;
            match entry.get("value") {
                None | Some(Value::Null) => {}
                Some(value) => {
                    values.insert(name.to_string(), value.clone());
                }
            }
        }

        let meta: Map<String, Value> = raw
            .iter()
            .filter(|(key, _)| key.as_str() != "fieldValues")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let text = |key: &str| meta.get(key).and_then(scalar_to_string);
        let (id, name, description) = (text("id"), text("name"), text("description"));

        Ok(Self {
            model,
            id,
            name,
            description,
            meta,
            values,
            raw,
        })
    }

    /// Decode a list envelope of data records.
    pub fn decode_list(model: &CustomObjectModel, body: Value) -> Result<Page<Self>> {
        model.decode_list(body)
    }

    pub fn model(&self) -> &CustomObjectModel {
        &self.model
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Top-level keys other than `fieldValues`, as received.
    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    /// One top-level key other than `fieldValues`.
    pub fn meta_value(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    /// The last payload seen from the server.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Value of a schema field, `None` if unset.
    pub fn get(&self, field: &str) -> Result<Option<&Value>> {
        self.check_field(field)?;
        Ok(self.values.get(field))
    }

    /// Value of a schema field as a string slice, if it is set to a string.
    pub fn get_str(&self, field: &str) -> Result<Option<&str>> {
        Ok(self.get(field)?.and_then(Value::as_str))
    }

    /// Set a schema field. Setting `null` unsets it.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        self.check_field(field)?;
        match value.into() {
            Value::Null => {
                self.values.remove(field);
            }
            value => {
                self.values.insert(field.to_string(), value);
            }
        }
        Ok(())
    }

    /// Unset a schema field so it is left out of outgoing payloads.
    pub fn clear(&mut self, field: &str) -> Result<()> {
        self.check_field(field)?;
        self.values.remove(field);
        Ok(())
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Set fields as `(name, value)` pairs in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.model
            .fields()
            .names()
            .filter_map(|name| self.values.get(name).map(|value| (name, value)))
    }

    fn check_field(&self, field: &str) -> Result<()> {
        if self.model.fields().contains_name(field) {
            Ok(())
        } else {
            Err(self.model.fields().mismatch(field))
        }
    }

    fn field_values(&self) -> Value {
        let fields = self.model.fields();
        let entries = fields
            .iter()
            .filter_map(|(id, name)| {
                self.values
                    .get(name)
                    .map(|value| json!({"id": id, "value": value}))
            })
            .collect();
        Value::Array(entries)
    }

    fn overlay(&self, body: &mut Map<String, Value>) {
        body.insert("fieldValues".into(), self.field_values());
        if let Some(name) = &self.name {
            body.insert("name".into(), Value::String(name.clone()));
        }
        if let Some(description) = &self.description {
            body.insert("description".into(), Value::String(description.clone()));
        }
    }
}

impl Record for CustomObjectRecord {
    type Type = CustomObjectModel;

    fn record_type(&self) -> CustomObjectModel {
        self.model.clone()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_create_json(&self) -> Value {
        let mut body = Map::new();
        self.overlay(&mut body);
        Value::Object(body)
    }

    fn to_update_json(&self) -> Result<Value> {
        let id = require_id(self.id.as_deref())?;
        let mut body = self.raw.clone();
        self.overlay(&mut body);
        body.insert("id".into(), Value::String(id.to_string()));
        body.insert("type".into(), Value::String(CUSTOM_OBJECT_DATA_TYPE.to_string()));
        Ok(Value::Object(body))
    }
}
