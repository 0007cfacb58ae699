//! End-to-end: drive the shipped manifest's operations against a mocked
//! partner API, the way the platform would.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zapbridge_app::app;
use zapbridge_triggers::{Credentials, Operation, RequestContext};

#[tokio::test]
async fn new_books_polling_returns_the_partner_array_unmodified() {
    let server = MockServer::start().await;
    let items = json!([{"id": 1, "title": "X"}]);
    Mock::given(method("GET"))
        .and(path("/zapier/triggers/new_books/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items.clone()))
        .mount(&server)
        .await;

    let app = app().unwrap();
    let creds = Credentials::new("secret-key");
    let base_url = server.uri();
    let ctx = RequestContext::new(&base_url, &creds);

    let descriptor = app.trigger("new_books").unwrap();
    let polled = match &descriptor.operation {
        Operation::Polling { ops, .. } => ops.poll(&ctx).await.unwrap(),
        Operation::Hook { .. } => panic!("new_books must be a polling trigger"),
    };
    assert_eq!(serde_json::Value::Array(polled), items);
}

#[tokio::test]
async fn new_book_hook_delivery_passes_the_payload_through() {
    let app = app().unwrap();
    let creds = Credentials::new("secret-key");
    let ctx = RequestContext::new("https://acme.example.com", &creds);

    let descriptor = app.trigger("new_book").unwrap();
    let payload = json!({"id": "123456", "bookTitle": "Hound of the Baskervilles"});
    let results = match &descriptor.operation {
        Operation::Hook { ops, .. } => ops.perform(&ctx, Some(payload.clone())).unwrap(),
        Operation::Polling { .. } => panic!("new_book must be a hook trigger"),
    };
    assert_eq!(results, vec![payload]);
}
