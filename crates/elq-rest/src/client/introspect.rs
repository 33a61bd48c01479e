use std::str::FromStr;

use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::asset::AssetKind;
use crate::binding::{CustomObjectModel, SchemaBinding};
use crate::codegen::{generate_model_source, CodegenOptions};
use crate::error::{Error, ErrorKind, Result};
use crate::record::{Operation, RecordType};

/// How to find a custom object definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomObjectLookup {
    /// By the custom object's id.
    Id(String),
    /// By exact name; the first search hit wins.
    Name(String),
}

impl FromStr for CustomObjectLookup {
    type Err = Error;

    /// `"#47"` looks up by id, anything else by name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(id) if !id.is_empty() => Ok(CustomObjectLookup::Id(id.to_string())),
            Some(_) => Err(Error::invalid_usage("custom object id after '#' is empty")),
            None if s.is_empty() => Err(Error::invalid_usage("custom object name is empty")),
            None => Ok(CustomObjectLookup::Name(s.to_string())),
        }
    }
}

impl std::fmt::Display for CustomObjectLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomObjectLookup::Id(id) => write!(f, "#{id}"),
            CustomObjectLookup::Name(name) => f.write_str(name),
        }
    }
}

impl super::EloquaRestClient {
    /// Fetch a custom object's full description (`depth=complete`).
    #[instrument(skip(self, lookup), fields(lookup = %lookup))]
    pub async fn describe_custom_object(&self, lookup: &CustomObjectLookup) -> Result<Value> {
        let kind = AssetKind::CustomObject;
        match lookup {
            CustomObjectLookup::Id(id) => {
                let path = kind.path(Operation::Get, Some(id.as_str()))?;
                self.inner()
                    .get_json(&path, &[("depth", "complete")])
                    .await
                    .map_err(Into::into)
            }
            CustomObjectLookup::Name(name) => {
                let path = kind.path(Operation::List, None)?;
                let search = format!("name={name}");
                let mut body: Value = self
                    .inner()
                    .get_json(&path, &[("search", search.as_str()), ("depth", "complete")])
                    .await?;

                let elements = match body.get_mut("elements").map(Value::take) {
                    Some(Value::Array(elements)) => elements,
                    _ => {
                        return Err(Error::decode(
                            "custom object search has no `elements` list",
                        ))
                    }
                };
                if elements.len() > 1 {
                    warn!(
                        name = %name,
                        matches = elements.len(),
                        "More than one custom object matches; using the first"
                    );
                }
                elements.into_iter().next().ok_or_else(|| {
                    Error::new(ErrorKind::NotFound {
                        url: self.inner().url(&path),
                    })
                })
            }
        }
    }

    /// Build a schema binding from the server's description of a custom
    /// object. `type_name` overrides the local type name.
    #[instrument(skip(self, lookup), fields(lookup = %lookup))]
    pub async fn introspect_custom_object(
        &self,
        lookup: &CustomObjectLookup,
        type_name: Option<&str>,
    ) -> Result<SchemaBinding> {
        let description = self.describe_custom_object(lookup).await?;
        let binding = SchemaBinding::from_custom_object(&description, type_name)?;
        debug!(
            type_name = binding.type_name(),
            parent_id = binding.parent_id(),
            fields = binding.fields().len(),
            "Introspected custom object"
        );
        Ok(binding)
    }

    /// Like [`introspect_custom_object`](Self::introspect_custom_object),
    /// wrapped in a shareable model.
    pub async fn custom_object_model(
        &self,
        lookup: &CustomObjectLookup,
        type_name: Option<&str>,
    ) -> Result<CustomObjectModel> {
        self.introspect_custom_object(lookup, type_name)
            .await
            .map(CustomObjectModel::new)
    }

    /// Introspect a custom object and generate Rust source for a typed
    /// wrapper over its data records.
    pub async fn generate_custom_object_code(
        &self,
        lookup: &CustomObjectLookup,
        type_name: Option<&str>,
        options: &CodegenOptions,
    ) -> Result<String> {
        let binding = self.introspect_custom_object(lookup, type_name).await?;
        generate_model_source(&binding, options)
    }

    /// Fetch an asset of any kind by name (`search=name=<name>`), first match.
    #[instrument(skip(self))]
    pub async fn find_asset_by_name(
        &self,
        kind: AssetKind,
        name: &str,
    ) -> Result<Option<crate::Asset>> {
        let params = json!({"search": format!("name={name}"), "depth": "complete"});
        let page = self.get_list(&kind, Some(&params)).await?;
        if page.len() > 1 {
            warn!(
                %kind,
                name,
                matches = page.len(),
                "More than one asset matches; using the first"
            );
        }
        Ok(page.into_iter().next())
    }
}
