//! Custom object data and asset round trips against a mock tenant.

use super::common::{basic_auth_header, dog_owner_description, MockTenant};
use eloqua_api::client::EMPTY_BAD_REQUEST_HINT;
use eloqua_api::rest::ErrorKind;
use eloqua_api::{AssetKind, CustomObjectLookup, EloquaRestClient};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const INSTANCE: &str = "/api/REST/2.0/data/customObject/47/instance";
const INSTANCES: &str = "/api/REST/2.0/data/customObject/47/instances";

async fn mount_dog_owner_search(tenant: &MockTenant) {
    Mock::given(method("GET"))
        .and(path("/api/REST/2.0/assets/customObjects"))
        .and(query_param("search", "name=DogOwner"))
        .and(query_param("depth", "complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [dog_owner_description()],
            "page": 1,
            "pageSize": 1000,
            "total": 1
        })))
        .expect(1)
        .mount(&tenant.server)
        .await;
}

fn stored(id: &str, breed: &str, name: Option<&str>) -> Value {
    let mut field_values = vec![json!({"type": "FieldValue", "id": "6041", "value": breed})];
    if let Some(name) = name {
        field_values.push(json!({"type": "FieldValue", "id": "6042", "value": name}));
    }
    json!({
        "type": "CustomObjectData",
        "id": id,
        "contactId": "88",
        "uniqueCode": format!("DO-{id}"),
        "fieldValues": field_values
    })
}

#[tokio::test]
async fn test_dog_owner_lifecycle() {
    let tenant = MockTenant::start().await;
    mount_dog_owner_search(&tenant).await;

    Mock::given(method("POST"))
        .and(path(INSTANCE))
        .and(header("Authorization", basic_auth_header().as_str()))
        .and(body_json(json!({"fieldValues": [{"id": "6041", "value": "Corgi"}]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored("123", "Corgi", None)))
        .expect(1)
        .mount(&tenant.server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("{INSTANCE}/123")))
        .and(body_partial_json(json!({
            "id": "123",
            "type": "CustomObjectData",
            "fieldValues": [
                {"id": "6041", "value": "Corgi"},
                {"id": "6042", "value": "Rex"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored("123", "Corgi", Some("Rex"))))
        .expect(1)
        .mount(&tenant.server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{INSTANCE}/123")))
        .and(query_param("depth", "complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored("123", "Corgi", Some("Rex"))))
        .expect(1)
        .mount(&tenant.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{INSTANCE}/123")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let dog_owner = client
        .custom_object_model(&CustomObjectLookup::Name("DogOwner".into()), None)
        .await
        .unwrap();
    assert_eq!(dog_owner.parent_id(), "47");
    assert_eq!(dog_owner.field_names(), vec!["Breed", "Name"]);

    let mut draft = dog_owner.new_record();
    draft.set("Breed", "Corgi").unwrap();
    let mut created = client.create(&draft).await.unwrap();
    assert_eq!(created.id(), Some("123"));
    assert_eq!(created.get_str("Breed").unwrap(), Some("Corgi"));
    assert!(!created.is_set("Name"));
    assert_eq!(created.meta_value("uniqueCode"), Some(&json!("DO-123")));

    created.set("Name", "Rex").unwrap();
    client.update(&created).await.unwrap();

    let fetched = client.get(&dog_owner, "123", None).await.unwrap();
    assert_eq!(fetched.get_str("Name").unwrap(), Some("Rex"));
    assert!(fetched.model().same_as(&dog_owner));

    let deleted = client.delete(&fetched).await.unwrap();
    assert_eq!(deleted, Value::Null);
}

#[tokio::test]
async fn test_list_keeps_server_order_and_counters() {
    let tenant = MockTenant::start().await;
    mount_dog_owner_search(&tenant).await;

    Mock::given(method("GET"))
        .and(path(INSTANCES))
        .and(query_param("search", "Name='Rex'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                stored("9", "Beagle", Some("Rex")),
                stored("3", "Corgi", Some("Rex"))
            ],
            "page": 1,
            "pageSize": 100,
            "total": 2
        })))
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let dog_owner = client
        .custom_object_model(&CustomObjectLookup::Name("DogOwner".into()), None)
        .await
        .unwrap();

    let page = client
        .get_list(&dog_owner, Some(&json!({"search": "Name='Rex'"})))
        .await
        .unwrap();
    assert_eq!(page.total, Some(2));
    assert_eq!(page.page_size, Some(100));
    let ids: Vec<_> = page.iter().map(|r| r.id().unwrap()).collect();
    assert_eq!(ids, vec!["9", "3"]);
    assert_eq!(page.first().unwrap().get_str("Breed").unwrap(), Some("Beagle"));
}

#[tokio::test]
async fn test_unknown_field_id_is_schema_mismatch() {
    let tenant = MockTenant::start().await;
    mount_dog_owner_search(&tenant).await;

    Mock::given(method("GET"))
        .and(path(INSTANCES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                stored("1", "Corgi", None),
                {"id": "2", "fieldValues": [{"id": "9999", "value": "?"}]}
            ],
            "total": 2
        })))
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let dog_owner = client
        .custom_object_model(&CustomObjectLookup::Name("DogOwner".into()), None)
        .await
        .unwrap();

    let err = client.get_list(&dog_owner, None).await.unwrap_err();
    assert!(err.is_schema_mismatch());
    assert!(matches!(err.kind, ErrorKind::ListElement { index: 1, .. }));
}

#[tokio::test]
async fn test_status_dispatch() {
    let tenant = MockTenant::start().await;
    mount_dog_owner_search(&tenant).await;

    Mock::given(method("GET"))
        .and(path(format!("{INSTANCE}/404")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&tenant.server)
        .await;
    Mock::given(method("POST"))
        .and(path(INSTANCE))
        .respond_with(ResponseTemplate::new(400))
        .mount(&tenant.server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{INSTANCE}/500")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal failure"))
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let dog_owner = client
        .custom_object_model(&CustomObjectLookup::Name("DogOwner".into()), None)
        .await
        .unwrap();

    let err = client.get(&dog_owner, "404", None).await.unwrap_err();
    assert!(err.is_not_found());

    let mut draft = dog_owner.new_record();
    draft.set("Breed", 12).unwrap();
    let err = client.create(&draft).await.unwrap_err();
    match err.kind {
        ErrorKind::RequestRejected { status, ref body, .. } => {
            assert_eq!(status, 400);
            assert_eq!(body, EMPTY_BAD_REQUEST_HINT);
        }
        other => panic!("expected RequestRejected, got {other:?}"),
    }

    let err = client.get(&dog_owner, "500", None).await.unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::RequestRejected { status: 500, ref body, .. } if body == "Internal failure"
    ));
}

#[tokio::test]
async fn test_find_form_and_rename() {
    let tenant = MockTenant::start().await;

    Mock::given(method("GET"))
        .and(path("/api/REST/2.0/assets/forms"))
        .and(query_param("search", "name=Signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [{
                "type": "Form",
                "id": "12",
                "name": "Signup",
                "htmlName": "signup",
                "depth": "complete"
            }],
            "total": 1
        })))
        .mount(&tenant.server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/REST/2.0/assets/form/12"))
        .and(body_partial_json(json!({
            "id": "12",
            "type": "Form",
            "name": "Signup 2026",
            "htmlName": "signup"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "12"})))
        .expect(1)
        .mount(&tenant.server)
        .await;

    let client = EloquaRestClient::connect(&tenant.credentials()).await.unwrap();
    let mut form = client
        .find_asset_by_name(AssetKind::Form, "Signup")
        .await
        .unwrap()
        .expect("form exists");
    assert_eq!(form.id(), Some("12"));

    form.set_name("Signup 2026");
    client.update(&form).await.unwrap();
}
