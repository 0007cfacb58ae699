// --- File: crates/zapbridge_triggers/src/trigger.rs ---
//! REST-hook operations on the current trigger-scoped endpoints
//! (`/zapier/triggers/{event}/...`).
//!
//! Compared to the legacy dialect in [`crate::subscription`], subscribe
//! forwards the Zap id from the request metadata and list threads the
//! `sample` flag, so the partner can serve canned data while the user is
//! configuring a trigger.

use crate::context::RequestContext;
use crate::descriptor::{HookOps, PollOps};
use crate::subscription::{passthrough, SubscriptionRecord};
use serde_json::{json, Map, Value};
use tracing::debug;
use zapbridge_common::{expect_json, expect_json_array, BoxFuture, BridgeError};

/// Operations for one trigger-scoped event.
#[derive(Debug, Clone)]
pub struct ScopedTrigger {
    event: String,
}

impl ScopedTrigger {
    pub fn new(event: &str) -> Self {
        ScopedTrigger {
            event: event.to_string(),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn subscribe_url(&self, base_url: &str) -> String {
        format!("{base_url}/zapier/triggers/{}/subscriptions/", self.event)
    }

    fn unsubscribe_url(&self, base_url: &str, subscription_id: &str) -> String {
        format!(
            "{base_url}/zapier/triggers/{}/subscriptions/{subscription_id}/",
            self.event
        )
    }

    fn list_url(&self, base_url: &str) -> String {
        format!("{base_url}/zapier/triggers/{}/", self.event)
    }

    pub async fn subscribe(
        &self,
        ctx: &RequestContext<'_>,
        target_url: &str,
    ) -> Result<SubscriptionRecord, BridgeError> {
        debug!(event = %self.event, "creating webhook subscription");
        let mut body = Map::new();
        body.insert("hookUrl".to_string(), json!(target_url));
        if let Some(zap_id) = &ctx.meta.zap_id {
            body.insert("zapId".to_string(), json!(zap_id));
        }
        let response = ctx
            .post(&self.subscribe_url(ctx.base_url))
            .json(&body)
            .send()
            .await?;
        let raw = expect_json(response).await?;
        SubscriptionRecord::from_response(&self.event, target_url, raw)
    }

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

    /// Fetches recent items, threading the sample flag so the partner can
    /// answer with canned data during trigger configuration.
    pub async fn list(&self, ctx: &RequestContext<'_>) -> Result<Vec<Value>, BridgeError> {
        debug!(event = %self.event, sample = ctx.meta.is_load_sample, "requesting trigger data");
        let response = ctx
            .get(&self.list_url(ctx.base_url))
            .query(&[("sample", ctx.meta.is_load_sample)])
            .send()
            .await?;
        expect_json_array(response).await
    }
}

impl HookOps for ScopedTrigger {
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
        Box::pin(ScopedTrigger::subscribe(self, ctx, target_url))
    }

    fn unsubscribe<'a>(
        &'a self,
        ctx: &'a RequestContext<'a>,
        subscription_id: &'a str,
    ) -> BoxFuture<'a, Value, BridgeError> {
        Box::pin(ScopedTrigger::unsubscribe(self, ctx, subscription_id))
    }

    fn list<'a>(&'a self, ctx: &'a RequestContext<'a>) -> BoxFuture<'a, Vec<Value>, BridgeError> {
        Box::pin(ScopedTrigger::list(self, ctx))
    }
}

// The list endpoint doubles as a polling source, so a scoped trigger can be
// wired into a polling descriptor directly.
impl PollOps for ScopedTrigger {
    fn poll<'a>(&'a self, ctx: &'a RequestContext<'a>) -> BoxFuture<'a, Vec<Value>, BridgeError> {
        Box::pin(ScopedTrigger::list(self, ctx))
    }
}
