use base64::Engine;
use eloqua_api::EloquaCredentials;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMPANY: &str = "Acme";
pub const USERNAME: &str = "jane.doe";
pub const PASSWORD: &str = "s3cret";

/// `Authorization` header every request to the tenant must carry.
pub fn basic_auth_header() -> String {
    let token = base64::engine::general_purpose::STANDARD
        .encode(format!("{COMPANY}\\{USERNAME}:{PASSWORD}"));
    format!("Basic {token}")
}

/// A mock tenant whose login endpoint (`/id`) points back at itself.
pub struct MockTenant {
    pub server: MockServer,
}

impl MockTenant {
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/id"))
            .and(header("Authorization", basic_auth_header().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "site": {"id": 42, "name": COMPANY},
                "user": {"id": 7, "username": USERNAME},
                "urls": {"base": server.uri(), "apis": {}}
            })))
            .mount(&server)
            .await;

        Self { server }
    }

    /// Credentials that discover the base URL through the mock login.
    pub fn credentials(&self) -> EloquaCredentials {
        EloquaCredentials::new(COMPANY, USERNAME, PASSWORD)
            .with_login_url(format!("{}/id", self.server.uri()))
    }
}

/// Custom object with two fields: `6041 -> Breed`, `6042 -> Name`.
pub fn dog_owner_description() -> Value {
    json!({
        "type": "CustomObject",
        "id": "47",
        "name": "DogOwner",
        "depth": "complete",
        "uniqueCodeFieldId": "6042",
        "fields": [
            {"type": "CustomObjectField", "id": "6041", "name": "Breed", "internalName": "Breed", "dataType": "text"},
            {"type": "CustomObjectField", "id": "6042", "name": "Name", "internalName": "Name", "dataType": "text"}
        ]
    })
}
