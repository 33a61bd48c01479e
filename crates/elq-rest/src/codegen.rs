//! Rust source generation for custom object bindings.
//!
//! [`generate_model_source`] turns a [`SchemaBinding`] into a typed wrapper
//! around [`CustomObjectRecord`](crate::CustomObjectRecord): one getter and
//! one setter per schema field plus constants describing the schema. The
//! output is checked with `syn` and formatted with `prettyplease` before it
//! is returned.
//!
//! For the dog-owner object the generated code looks like:
//!
//! ```ignore
//! pub struct DogOwner {
//!     record: eloqua_rest::CustomObjectRecord,
//! }
//!
//! impl DogOwner {
//!     pub const OBJECT_NAME: &'static str = "DogOwner";
//!     pub const PARENT_ID: &'static str = "47";
//!     pub const FIELDS: &'static [&'static str] = &["Breed", "Name"];
//!     pub const ID_FIELD_MAP: &'static [(&'static str, &'static str)] =
//!         &[("6041", "Breed"), ("6042", "Name")];
//!
//!     pub fn breed(&self) -> Option<&serde_json::Value> { ... }
//!     pub fn set_breed(&mut self, value: impl Into<serde_json::Value>) -> eloqua_rest::Result<()> { ... }
//!     // ...
//! }
//! ```

use std::collections::HashSet;

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::binding::SchemaBinding;
use crate::error::{Error, ErrorKind, Result};

/// Method names the wrapper defines itself.
const RESERVED_METHODS: &[&str] = &[
    "new",
    "binding",
    "model",
    "from_record",
    "as_record",
    "as_record_mut",
    "into_record",
];

/// Knobs for [`generate_model_source`].
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Path the generated code uses to reach this crate.
    pub crate_path: String,
    /// Prepend a "generated, do not edit" comment.
    pub include_header: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            crate_path: "eloqua_rest".to_string(),
            include_header: true,
        }
    }
}

impl CodegenOptions {
    pub fn with_crate_path(mut self, crate_path: impl Into<String>) -> Self {
        self.crate_path = crate_path.into();
        self
    }

    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }
}

/// Generate formatted Rust source for a typed wrapper over `binding`.
pub fn generate_model_source(
    binding: &SchemaBinding,
    options: &CodegenOptions,
) -> Result<String> {
    let tokens = generate_model_tokens(binding, options)?;
    let file = validate_code(tokens)?;
    let formatted = prettyplease::unparse(&file);

    if options.include_header {
        Ok(format!(
            "// Generated by eloqua-codegen from custom object {:?} (#{}). Do not edit by hand.\n\n{}",
            binding.object_name(),
            binding.parent_id(),
            formatted
        ))
    } else {
        Ok(formatted)
    }
}

/// Token stream for the wrapper, before validation and formatting.
pub fn generate_model_tokens(
    binding: &SchemaBinding,
    options: &CodegenOptions,
) -> Result<TokenStream> {
    let krate: syn::Path = syn::parse_str(&options.crate_path).map_err(|e| {
        Error::new(ErrorKind::Codegen(format!(
            "invalid crate path {:?}: {e}",
            options.crate_path
        )))
    })?;
    let type_ident = type_ident(binding.type_name())?;

    let type_name = binding.type_name();
    let object_name = binding.object_name();
    let parent_id = binding.parent_id();
    let field_names = binding.field_names();
    let map_ids: Vec<&str> = binding.fields().ids().collect();
    let meta_fields = binding.meta_fields();

    let struct_doc = format!(" Typed data record of the `{object_name}` custom object (#{parent_id}).");

    let mut used: HashSet<String> = RESERVED_METHODS.iter().map(|m| m.to_string()).collect();
    let accessors = binding.fields().iter().map(|(id, name)| {
        let getter = field_ident(name, id, &mut used);
        let setter = format_ident!("set_{}", getter);
        let clearer = format_ident!("clear_{}", getter);
        let getter_doc = format!(" `{name}` (field {id}).");
        let setter_doc = format!(" Set `{name}`; `null` unsets it.");
        let clearer_doc = format!(" Unset `{name}`.");
        quote! {
            #[doc = #getter_doc]
            pub fn #getter(&self) -> Option<&serde_json::Value> {
                self.record.get(#name).ok().flatten()
            }

            #[doc = #setter_doc]
            pub fn #setter(&mut self, value: impl Into<serde_json::Value>) -> #krate::Result<()> {
                self.record.set(#name, value)
            }

            #[doc = #clearer_doc]
            pub fn #clearer(&mut self) -> #krate::Result<()> {
                self.record.clear(#name)
            }
        }
    });
    let accessors: Vec<TokenStream> = accessors.collect();

    Ok(quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct #type_ident {
            record: #krate::CustomObjectRecord,
        }

        impl #type_ident {
            pub const TYPE_NAME: &'static str = #type_name;
            pub const OBJECT_NAME: &'static str = #object_name;
            pub const PARENT_ID: &'static str = #parent_id;
            pub const FIELDS: &'static [&'static str] = &[#(#field_names),*];
            pub const ID_FIELD_MAP: &'static [(&'static str, &'static str)] =
                &[#((#map_ids, #field_names)),*];
            pub const META_FIELDS: &'static [&'static str] = &[#(#meta_fields),*];

            /// The schema binding these constants describe.
            pub fn binding() -> #krate::Result<#krate::SchemaBinding> {
                let fields = #krate::FieldSchemaMap::new(Self::ID_FIELD_MAP.iter().copied())?;
                #krate::SchemaBinding::new(
                    Self::TYPE_NAME,
                    Self::OBJECT_NAME,
                    Self::PARENT_ID,
                    fields,
                    Self::META_FIELDS.iter().map(|m| m.to_string()).collect(),
                )
            }

            /// A shared model over [`Self::binding`].
            pub fn model() -> #krate::Result<#krate::CustomObjectModel> {
                Self::binding().map(#krate::CustomObjectModel::new)
            }

            /// An empty record of this custom object.
            pub fn new(model: &#krate::CustomObjectModel) -> #krate::Result<Self> {
                Self::from_record(model.new_record())
            }

            /// Wrap a decoded record. The record's model must belong to this
            /// custom object and know every field.
            pub fn from_record(record: #krate::CustomObjectRecord) -> #krate::Result<Self> {
                let model = record.model();
                if model.parent_id() != Self::PARENT_ID {
                    return Err(#krate::Error::new(#krate::ErrorKind::InvalidUsage(format!(
                        "record belongs to custom object #{}, not #{}",
                        model.parent_id(),
                        Self::PARENT_ID
                    ))));
                }
                for field in Self::FIELDS {
                    model.fields().resolve_inverse(field)?;
                }
                Ok(Self { record })
            }

            pub fn as_record(&self) -> &#krate::CustomObjectRecord {
                &self.record
            }

            pub fn as_record_mut(&mut self) -> &mut #krate::CustomObjectRecord {
                &mut self.record
            }

            pub fn into_record(self) -> #krate::CustomObjectRecord {
                self.record
            }

            #(#accessors)*
        }
    })
}

/// Parse the token stream as a Rust file.
pub fn validate_code(tokens: TokenStream) -> Result<syn::File> {
    syn::parse2(tokens)
        .map_err(|e| Error::new(ErrorKind::Codegen(format!("generated code is invalid: {e}"))))
}

fn type_ident(type_name: &str) -> Result<syn::Ident> {
    let pascal = sanitize(type_name).to_case(Case::Pascal);
    let pascal = match pascal.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("Co{pascal}"),
        Some(_) => pascal,
        None => {
            return Err(Error::new(ErrorKind::Codegen(format!(
                "type name {type_name:?} has no usable characters"
            ))))
        }
    };
    syn::parse_str::<syn::Ident>(&pascal).map_err(|_| {
        Error::new(ErrorKind::Codegen(format!(
            "type name {type_name:?} is not a valid Rust identifier"
        )))
    })
}

/// snake_case getter name for a field.
///
/// The getter and its `set_` / `clear_` companions must all be free in
/// `used`; otherwise the field id (then a counter) is appended until they
/// are. All three names are claimed before returning.
fn field_ident(name: &str, id: &str, used: &mut HashSet<String>) -> syn::Ident {
    let id: String = id.chars().filter(char::is_ascii_alphanumeric).collect();
    let mut ident = sanitize(name).to_case(Case::Snake);
    if ident.is_empty() {
        ident = format!("field_{id}");
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident = format!("field_{ident}");
    }
    if RESERVED_METHODS.contains(&ident.as_str()) {
        ident.push_str("_field");
    }
    if syn::parse_str::<syn::Ident>(&ident).is_err() {
        ident.push('_');
    }

    let companions = |ident: &str| {
        [
            ident.to_string(),
            format!("set_{ident}"),
            format!("clear_{ident}"),
        ]
    };
    let is_free = |ident: &str, used: &HashSet<String>| {
        companions(ident).iter().all(|name| !used.contains(name))
    };

    if !is_free(&ident, used) {
        let base = format!("{ident}_{id}");
        ident = base.clone();
        let mut n = 2;
        while !is_free(&ident, used) {
            ident = format!("{base}_{n}");
            n += 1;
        }
    }
    used.extend(companions(&ident));
    format_ident!("{}", ident)
}

/// Keep ASCII letters and digits, turn everything else into word breaks.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
