//! Credential test round trip against a mocked partner API.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zapbridge_app::verify_credentials;
use zapbridge_common::BridgeError;
use zapbridge_triggers::{Credentials, RequestContext};

#[tokio::test]
async fn valid_credentials_return_the_test_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zapier/auth/"))
        .and(body_json(json!({
            "api_key": "secret-key",
            "email": "reader@example.com"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"connectionLabel": "reader"})),
        )
        .mount(&server)
        .await;

    let creds = Credentials::new("secret-key").with_email("reader@example.com");
    let base_url = server.uri();
    let ctx = RequestContext::new(&base_url, &creds);

    let body = verify_credentials(&ctx).await.unwrap();
    assert_eq!(body["connectionLabel"], "reader");
}

#[tokio::test]
async fn rejected_credentials_expose_the_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zapier/auth/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unknown API token."))
        .mount(&server)
        .await;

    let creds = Credentials::new("bad-key").with_email("reader@example.com");
    let base_url = server.uri();
    let ctx = RequestContext::new(&base_url, &creds);

    let err = verify_credentials(&ctx).await.unwrap_err();
    match err {
        BridgeError::InvalidCredentials { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unknown API token.");
        }
        other => panic!("expected InvalidCredentials, got: {other:?}"),
    }
}
