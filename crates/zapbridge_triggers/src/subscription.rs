// --- File: crates/zapbridge_triggers/src/subscription.rs ---
//! REST-hook operations on the legacy hook-scoped endpoints
//! (`/zapier/hooks/{event}/...`).
//!
//! The trigger-scoped dialect lives in [`crate::trigger`]; both share the
//! same lifecycle contract and differ only in URL layout and the extra
//! metadata the newer endpoints accept.

use crate::context::RequestContext;
use crate::descriptor::HookOps;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use zapbridge_common::{expect_json, expect_json_array, invalid_payload, BoxFuture, BridgeError};

/// A webhook subscription as carried through the subscribe/unsubscribe
/// round trip. Ownership of the underlying record lives in the partner API;
/// only the opaque id matters on our side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub subscription_id: String,
    pub hook_url: String,
    pub event_name: String,
    /// Full subscribe response. The platform stores this verbatim and hands
    /// it back on unsubscribe, so nothing from it may be discarded.
    pub raw: Value,
}

impl SubscriptionRecord {
    pub(crate) fn from_response(
        event: &str,
        hook_url: &str,
        raw: Value,
    ) -> Result<Self, BridgeError> {
        let subscription_id = raw
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_payload("subscribe response is missing 'id'"))?
            .to_string();
        Ok(SubscriptionRecord {
            subscription_id,
            hook_url: hook_url.to_string(),
            event_name: event.to_string(),
            raw,
        })
    }
}

/// Wraps one delivered payload into the one-element result list the
/// platform expects. A missing payload is an error, never a silent null.
pub(crate) fn passthrough(event: &str, inbound: Option<Value>) -> Result<Vec<Value>, BridgeError> {
    debug!(event, "processing inbound webhook payload");
    match inbound {
        Some(payload) => Ok(vec![payload]),
        None => Err(invalid_payload(format!(
            "no payload delivered for event '{event}'"
        ))),
    }
}

/// Operations for one hook-scoped event. Holds the event name explicitly;
/// everything else arrives per call through the [`RequestContext`].
#[derive(Debug, Clone)]
pub struct RestHook {
    event: String,
}

impl RestHook {
    pub fn new(event: &str) -> Self {
        RestHook {
            event: event.to_string(),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn subscribe_url(&self, base_url: &str) -> String {
        format!("{base_url}/zapier/hooks/{}/subscribe/", self.event)
    }

    fn unsubscribe_url(&self, base_url: &str, subscription_id: &str) -> String {
        format!(
            "{base_url}/zapier/hooks/{}/unsubscribe/{subscription_id}/",
            self.event
        )
    }

    fn list_url(&self, base_url: &str) -> String {
        format!("{base_url}/zapier/hooks/{}/list/", self.event)
    }

    /// Creates a new subscription; the partner posts future events to
    /// `target_url`.
    pub async fn subscribe(
        &self,
        ctx: &RequestContext<'_>,
        target_url: &str,
    ) -> Result<SubscriptionRecord, BridgeError> {
        debug!(event = %self.event, "creating webhook subscription");
        let response = ctx
            .post(&self.subscribe_url(ctx.base_url))
            .json(&json!({ "hookUrl": target_url }))
            .send()
            .await?;
        let raw = expect_json(response).await?;
        SubscriptionRecord::from_response(&self.event, target_url, raw)
    }

    /// Deletes a subscription by id.
    pub async fn unsubscribe(
        &self,
        ctx: &RequestContext<'_>,
        subscription_id: &str,
    ) -> Result<Value, BridgeError> {
        debug!(event = %self.event, subscription_id, "deleting webhook subscription");
        let response = ctx
            .delete(&self.unsubscribe_url(ctx.base_url, subscription_id))
            .send()
            .await?;
        expect_json(response).await
    }

    /// Fetches recent items for the sample-data UX.
    pub async fn list(&self, ctx: &RequestContext<'_>) -> Result<Vec<Value>, BridgeError> {
        debug!(event = %self.event, "requesting hook list");
        let response = ctx.get(&self.list_url(ctx.base_url)).send().await?;
        expect_json_array(response).await
    }
}

impl HookOps for RestHook {
    fn perform(
        &self,
        _ctx: &RequestContext<'_>,
        inbound: Option<Value>,
    ) -> Result<Vec<Value>, BridgeError> {
        passthrough(&self.event, inbound)
    }

    fn subscribe<'a>(
        &'a self,
        ctx: &'a RequestContext<'a>,
        target_url: &'a str,
    ) -> BoxFuture<'a, SubscriptionRecord, BridgeError> {
        Box::pin(RestHook::subscribe(self, ctx, target_url))
    }

    fn unsubscribe<'a>(
        &'a self,
        ctx: &'a RequestContext<'a>,
        subscription_id: &'a str,
    ) -> BoxFuture<'a, Value, BridgeError> {
        Box::pin(RestHook::unsubscribe(self, ctx, subscription_id))
    }

    fn list<'a>(&'a self, ctx: &'a RequestContext<'a>) -> BoxFuture<'a, Vec<Value>, BridgeError> {
        Box::pin(RestHook::list(self, ctx))
    }
}
