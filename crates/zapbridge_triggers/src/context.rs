// --- File: crates/zapbridge_triggers/src/context.rs ---
use reqwest::{header, Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use zapbridge_common::HTTP_CLIENT;
use zapbridge_config::AppConfig;

/// Per-call credentials injected by the platform.
///
/// Immutable once supplied and never persisted by this workspace; the bearer
/// token authorizes every partner API call, the email only identifies the
/// account during the credential test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Credentials {
    pub fn new(api_key: &str) -> Self {
        Credentials {
            api_key: api_key.to_string(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
}

/// Request metadata the platform attaches to a single invocation.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    /// Identifier of the Zap driving the call, forwarded on subscribe so the
    /// partner can correlate subscriptions.
    pub zap_id: Option<String>,
    /// True while the platform is loading sample data for the editor UX.
    pub is_load_sample: bool,
}

/// Everything a single operation call needs: HTTP client, partner base URL,
/// caller credentials and request metadata.
///
/// This replaces the host runtime's implicit `z` / `bundle` pair with one
/// explicit value, so operation code never reaches into ambient state.
#[derive(Clone)]
pub struct RequestContext<'a> {
    pub http: &'a Client,
    pub base_url: &'a str,
    pub credentials: &'a Credentials,
    pub meta: RequestMeta,
}

impl<'a> RequestContext<'a> {
    /// Builds a context around the shared HTTP client.
    pub fn new(base_url: &'a str, credentials: &'a Credentials) -> Self {
        RequestContext {
            http: &HTTP_CLIENT,
            base_url,
            credentials,
            meta: RequestMeta::default(),
        }
    }

    pub fn from_config(config: &'a AppConfig, credentials: &'a Credentials) -> Self {
        Self::new(&config.api.base_url, credentials)
    }

    pub fn with_meta(mut self, meta: RequestMeta) -> Self {
        self.meta = meta;
        self
    }

    // Authorized request builders. Bearer auth is the canonical scheme for
    // all trigger-facing partner endpoints.
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.authorized(self.http.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.authorized(self.http.post(url))
    }

    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.authorized(self.http.delete(url))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.credentials.api_key)
            .header(header::ACCEPT, "application/json")
    }
}
