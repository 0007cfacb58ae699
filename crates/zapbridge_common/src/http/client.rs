// --- File: crates/zapbridge_common/src/http/client.rs ---
use crate::error::BridgeError;
use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError, Response};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A static HTTP client reused across all partner API calls.
/// Configured with a default timeout; the platform's own client policy
/// (cancellation, outer retries) sits above this.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
});

/// Creates a new HTTP client with a custom timeout, for deployments where
/// `api.timeout_secs` is set in configuration.
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Reads a partner response, surfacing any non-2xx status unchanged as
/// [`BridgeError::Upstream`] and parsing the body as JSON otherwise.
///
/// Every operation in this workspace funnels its response through here, so
/// a failed call is never silently treated as a success.
pub async fn expect_json(response: Response) -> Result<serde_json::Value, BridgeError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BridgeError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

/// Like [`expect_json`], but requires the body to be a JSON array.
pub async fn expect_json_array(
    response: Response,
) -> Result<Vec<serde_json::Value>, BridgeError> {
    let value = expect_json(response).await?;
    serde_json::from_value(value).map_err(BridgeError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn expect_json_surfaces_non_2xx_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fail"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
            .mount(&server)
            .await;

        let response = HTTP_CLIENT
            .get(format!("{}/fail", server.uri()))
            .send()
            .await
            .unwrap();
        let err = expect_json(response).await.unwrap_err();
        match err {
            BridgeError::Upstream { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "down for maintenance");
            }
            other => panic!("expected Upstream, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn expect_json_array_rejects_non_array_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/object"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"a": 1})))
            .mount(&server)
            .await;

        let response = HTTP_CLIENT
            .get(format!("{}/object", server.uri()))
            .send()
            .await
            .unwrap();
        assert!(matches!(
            expect_json_array(response).await,
            Err(BridgeError::Parse(_))
        ));
    }
}
