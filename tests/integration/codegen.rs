//! Introspect, persist the binding, generate code from the saved copy.

use super::common::{dog_owner_description, MockTenant};
use eloqua_api::rest::{generate_model_source, CodegenOptions};
use eloqua_api::{CustomObjectLookup, CustomObjectModel, EloquaRestClient, SchemaBinding};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_binding_survives_disk_round_trip() {
    let tenant = MockTenant::start().await;

    Mock::given(method("GET"))
        .and(path("/api/REST/2.0/assets/customObject/47"))
        .and(query_param("depth", "complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dog_owner_description()))
        .expect(1)
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let lookup: CustomObjectLookup = "#47".parse().unwrap();
    let binding = client
        .introspect_custom_object(&lookup, Some("Owner"))
        .await
        .unwrap();
    assert_eq!(binding.type_name(), "Owner");
    assert_eq!(binding.object_name(), "DogOwner");

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("owner.json");
    std::fs::write(&file, binding.to_json_pretty().unwrap()).unwrap();

    let loaded = SchemaBinding::from_json(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(loaded, binding);
    assert_eq!(loaded.fields().id_of("Name"), Some("6042"));

    // A model built offline decodes what the server sends.
    let model = CustomObjectModel::new(loaded);
    let record = eloqua_api::rest::CustomObjectRecord::decode(
        model,
        json!({"id": "5", "fieldValues": [{"id": "6042", "value": "Spot"}]}),
    )
    .unwrap();
    assert_eq!(record.get_str("Name").unwrap(), Some("Spot"));
}

#[tokio::test]
async fn test_generated_wrapper_is_valid_rust() {
    let tenant = MockTenant::start().await;

    Mock::given(method("GET"))
        .and(path("/api/REST/2.0/assets/customObjects"))
        .and(query_param("search", "name=DogOwner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [dog_owner_description()],
            "total": 1
        })))
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let options = CodegenOptions::default().with_crate_path("eloqua_api::rest");
    let source = client
        .generate_custom_object_code(&CustomObjectLookup::Name("DogOwner".into()), None, &options)
        .await
        .unwrap();

    assert!(source.starts_with("// Generated by eloqua-codegen"));
    assert!(source.contains("eloqua_api::rest::CustomObjectRecord"));

    let file = syn::parse_file(&source).unwrap();
    let structs: Vec<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(item) => Some(item.ident.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(structs, vec!["DogOwner"]);

    // Generating from a reloaded binding gives the same source.
    let binding = client
        .introspect_custom_object(&CustomObjectLookup::Name("DogOwner".into()), None)
        .await
        .unwrap();
    let reloaded = SchemaBinding::from_json(&binding.to_json_pretty().unwrap()).unwrap();
    assert_eq!(generate_model_source(&reloaded, &options).unwrap(), source);
}

/// Write `source` plus a `main` exercising it where trybuild can compile it.
fn write_program(name: &str, source: &str, main: &str) -> std::path::PathBuf {
    let dir = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("generated");
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join(format!("{name}.rs"));
    std::fs::write(&file, format!("{source}\nuse eloqua_api::rest::Record;\n\n{main}\n")).unwrap();
    file
}

#[test]
fn test_generated_wrappers_compile_and_run() {
    let options = CodegenOptions::default().with_crate_path("eloqua_api::rest");

    let dog_owner = SchemaBinding::from_custom_object(&dog_owner_description(), None).unwrap();
    let dog_owner = write_program(
        "dog_owner",
        &generate_model_source(&dog_owner, &options).unwrap(),
        r#"fn main() {
    let model = DogOwner::model().unwrap();
    let mut owner = DogOwner::new(&model).unwrap();
    owner.set_breed("Corgi").unwrap();
    assert_eq!(owner.breed(), Some(&serde_json::json!("Corgi")));
    assert_eq!(owner.name(), None);
    assert_eq!(
        owner.as_record().to_create_json(),
        serde_json::json!({"fieldValues": [{"id": "6041", "value": "Corgi"}]})
    );
    owner.clear_breed().unwrap();
    assert!(owner.breed().is_none());
    assert_eq!(DogOwner::PARENT_ID, "47");
}"#,
    );

    // `Set Breed` would otherwise take `set_breed`, the setter of `Breed`.
    let fields =
        eloqua_api::rest::FieldSchemaMap::new([("1", "Breed"), ("2", "Set Breed")]).unwrap();
    let clashing = SchemaBinding::new("Kennel", "Kennel", "9", fields, vec![]).unwrap();
    let clashing = write_program(
        "kennel",
        &generate_model_source(&clashing, &options).unwrap(),
        r#"fn main() {
    let model = Kennel::model().unwrap();
    let mut kennel = Kennel::new(&model).unwrap();
    kennel.set_breed("Corgi").unwrap();
    kennel.set_set_breed_2("yes").unwrap();
    assert_eq!(
        kennel.as_record().to_create_json(),
        serde_json::json!({"fieldValues": [
            {"id": "1", "value": "Corgi"},
            {"id": "2", "value": "yes"}
        ]})
    );
}"#,
    );

    let cases = trybuild::TestCases::new();
    cases.pass(dog_owner);
    cases.pass(clashing);
}
