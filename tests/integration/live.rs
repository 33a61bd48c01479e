//! Live tests against a real Eloqua instance.
//!
//! They expect a custom object named `TEST_Dog_Owner` with the fields
//! `DogBreed1`, `DogName1`, `DogColor1`, `StartOfOwnership1` (date) and
//! `AgeAtStartOfOwnership1` (number). Eloqua hands every value back as a
//! string.

use eloqua_api::{
    AssetKind, CustomObjectLookup, CustomObjectModel, EloquaCredentials, EloquaRestClient,
    Record,
};
use serde_json::json;

const DOG_OWNER: &str = "TEST_Dog_Owner";

async fn connect() -> EloquaRestClient {
    let creds = EloquaCredentials::from_env()
        .expect("ELOQUA_COMPANY, ELOQUA_USERNAME and ELOQUA_PASSWORD must be set");
    EloquaRestClient::connect(&creds)
        .await
        .expect("failed to connect")
}

async fn dog_owner(client: &EloquaRestClient) -> CustomObjectModel {
    client
        .custom_object_model(&CustomObjectLookup::Name(DOG_OWNER.into()), Some("DogOwner"))
        .await
        .expect("TEST_Dog_Owner must exist")
}

async fn count(client: &EloquaRestClient, model: &CustomObjectModel) -> u64 {
    let page = client
        .get_list(model, Some(&json!({"count": 1})))
        .await
        .unwrap();
    page.total.unwrap_or_default()
}

#[tokio::test]
#[ignore]
async fn test_live_generate_code() {
    let client = connect().await;
    let source = client
        .generate_custom_object_code(
            &CustomObjectLookup::Name(DOG_OWNER.into()),
            Some("DogOwner"),
            &Default::default(),
        )
        .await
        .unwrap();
    println!("{source}");
    assert!(source.contains("pub fn dog_name"));
}

#[tokio::test]
#[ignore]
async fn test_live_dog_owner_lifecycle() {
    let client = connect().await;
    let model = dog_owner(&client).await;
    let before = count(&client, &model).await;

    let adopted = chrono::Utc::now().timestamp();
    let mut draft = model.new_record();
    draft.set("DogBreed1", "Corgi").unwrap();
    draft.set("DogName1", "Spot").unwrap();
    draft.set("DogColor1", "Red").unwrap();
    draft.set("StartOfOwnership1", adopted).unwrap();
    draft.set("AgeAtStartOfOwnership1", 1).unwrap();

    let mut created = client.create(&draft).await.unwrap();
    let id = created.id().expect("server assigns an id").to_string();
    println!("Created {id}");
    assert_eq!(created.get_str("DogName1").unwrap(), Some("Spot"));
    assert_eq!(created.get_str("AgeAtStartOfOwnership1").unwrap(), Some("1"));
    assert_eq!(
        created.get_str("StartOfOwnership1").unwrap(),
        Some(adopted.to_string().as_str())
    );

    created.set("DogName1", "Poochy Poo").unwrap();
    client.update(&created).await.unwrap();

    let fetched = client.get(&model, &id, None).await.unwrap();
    assert_eq!(fetched.get_str("DogName1").unwrap(), Some("Poochy Poo"));

    let found = client
        .get_list(&model, Some(&json!({"search": "DogName1='Poochy Poo'"})))
        .await
        .unwrap();
    assert!(found.iter().any(|record| record.id() == Some(id.as_str())));

    client.delete(&fetched).await.unwrap();
    assert!(count(&client, &model).await < before + 1);
}

#[tokio::test]
#[ignore]
async fn test_live_custom_object_asset() {
    let client = connect().await;
    let kind = AssetKind::CustomObject;

    let page = client.get_list(&kind, Some(&json!({"count": 5}))).await.unwrap();
    println!("{} custom objects", page.total.unwrap_or_default());

    let existing = client
        .find_asset_by_name(kind, DOG_OWNER)
        .await
        .unwrap()
        .expect("TEST_Dog_Owner must exist");
    let fetched = client
        .get(&kind, existing.id().unwrap(), Some(&json!({"depth": "complete"})))
        .await
        .unwrap();
    assert_eq!(fetched.name(), Some(DOG_OWNER));
    assert!(fetched.raw_value("fields").is_some());
}
