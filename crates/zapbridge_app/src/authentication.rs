// --- File: crates/zapbridge_app/src/authentication.rs ---
//! Custom (API key) authentication: the descriptor the platform renders in
//! its account-connection form, and the single test round trip that decides
//! whether a set of credentials is valid.

use reqwest::header;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use zapbridge_common::BridgeError;
use zapbridge_triggers::RequestContext;

/// Path of the credential test endpoint, relative to the partner base URL.
pub const AUTH_TEST_PATH: &str = "/zapier/auth/";

/// One input field of the account-connection form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthField {
    pub key: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    pub required: bool,
}

/// The test call the platform issues after the user submits the form.
#[derive(Debug, Clone, Serialize)]
pub struct AuthTest {
    pub method: &'static str,
    pub path: &'static str,
}

/// The complete authentication descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Authentication {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub connection_label: &'static str,
    pub fields: Vec<AuthField>,
    pub test: AuthTest,
}

/// The authentication block shipped with the app: custom auth collecting an
/// email plus a personal API key, validated against `/zapier/auth/`.
pub fn authentication() -> Authentication {
    Authentication {
        kind: "custom",
        connection_label: "{{connectionLabel}}",
        fields: vec![
            AuthField {
                key: "email",
                label: "Email address",
                help_text: "The email address that you use to log in to ACME.",
                required: true,
            },
            AuthField {
                key: "api_key",
                label: "Personal API key",
                help_text: "Your API key is available from your ACME account.",
                required: true,
            },
        ],
        test: AuthTest {
            method: "POST",
            path: AUTH_TEST_PATH,
        },
    }
}

/// Performs the credential test round trip.
///
/// One request, no retries: a 2xx marks the credentials valid and returns
/// the parsed body (it carries the connection label); anything else fails
/// with [`BridgeError::InvalidCredentials`], the body surfaced verbatim so
/// the platform can show it to the end user.
pub async fn verify_credentials(ctx: &RequestContext<'_>) -> Result<Value, BridgeError> {
    debug!("testing partner API credentials");
    let url = format!("{}{}", ctx.base_url, AUTH_TEST_PATH);
    let response = ctx
        .http
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .json(&json!({
            "api_key": ctx.credentials.api_key,
            "email": ctx.credentials.email,
        }))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BridgeError::InvalidCredentials {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}
