//! Shared fixtures for unit tests.

use serde_json::{json, Value};

use crate::binding::{CustomObjectModel, SchemaBinding};
use crate::schema::FieldSchemaMap;

/// `GET assets/customObject/47?depth=complete` for a dog-owner object.
pub(crate) fn dog_owner_description() -> Value {
    json!({
        "type": "CustomObject",
        "id": "47",
        "name": "DogOwner",
        "depth": "complete",
        "description": "People and their dogs",
        "uniqueCodeFieldId": "6041",
        "fields": [
            {"type": "CustomObjectField", "id": "6041", "name": "Breed", "internalName": "Breed", "dataType": "text"},
            {"type": "CustomObjectField", "id": "6042", "name": "Name", "internalName": "Name", "dataType": "text"},
            {"type": "CustomObjectField", "id": "6043", "name": "Age", "internalName": "Age", "dataType": "numeric"},
            {"type": "CustomObjectField", "id": "6044", "name": "Adopted", "internalName": "Adopted", "dataType": "date"},
            {"type": "CustomObjectField", "id": "6045", "name": "Owner email", "internalName": "Owner_email", "dataType": "text"}
        ]
    })
}

/// Two-field binding: `6041 -> Breed`, `6042 -> Name`, parent `47`.
pub(crate) fn dog_owner_model() -> CustomObjectModel {
    let fields = FieldSchemaMap::new([("6041", "Breed"), ("6042", "Name")]).unwrap();
    SchemaBinding::new("DogOwner", "DogOwner", "47", fields, vec!["id".into(), "name".into()])
        .unwrap()
        .into()
}
