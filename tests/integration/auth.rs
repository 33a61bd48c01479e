//! Login bootstrap against a mock tenant.

use super::common::{MockTenant, COMPANY, USERNAME};
use eloqua_api::auth::ErrorKind;
use eloqua_api::{EloquaCredentials, EloquaRestClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_connect_discovers_base_url() {
    let tenant = MockTenant::start().await;

    let client = EloquaRestClient::connect(&tenant.credentials())
        .await
        .expect("login should resolve the base URL");

    assert_eq!(client.base_url(), tenant.server.uri());
    assert_eq!(client.inner().login(), format!("{COMPANY}\\{USERNAME}"));
}

#[tokio::test]
async fn test_wrong_password_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("Not authenticated.")))
        .mount(&server)
        .await;

    let creds = EloquaCredentials::new(COMPANY, USERNAME, "wrong")
        .with_login_url(format!("{}/id", server.uri()));

    let err = creds.connect().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Authentication(_)));

    let err = EloquaRestClient::connect(&creds).await.unwrap_err();
    assert!(matches!(
        err.kind,
        eloqua_api::rest::ErrorKind::Authentication(_)
    ));
}
