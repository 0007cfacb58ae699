// --- File: crates/zapbridge_triggers/src/polling.rs ---
//! Polling-based trigger perform: one authorized GET per schedule tick.
//!
//! Any "only new since last poll" semantics belong to the partner endpoint;
//! the returned array is passed through without deduplication.

use crate::context::RequestContext;
use crate::descriptor::PollOps;
use serde_json::Value;
use tracing::debug;
use zapbridge_common::{expect_json_array, BoxFuture, BridgeError};

/// Polling operations for one event.
#[derive(Debug, Clone)]
pub struct PollingTrigger {
    event: String,
}

impl PollingTrigger {
    pub fn new(event: &str) -> Self {
        PollingTrigger {
            event: event.to_string(),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn poll_url(&self, base_url: &str) -> String {
        format!("{base_url}/zapier/triggers/{}/", self.event)
    }

    /// Fetches the current batch of records for this event.
    pub async fn perform(&self, ctx: &RequestContext<'_>) -> Result<Vec<Value>, BridgeError> {
        debug!(event = %self.event, "polling trigger data");
        let response = ctx.get(&self.poll_url(ctx.base_url)).send().await?;
        expect_json_array(response).await
    }
}

impl PollOps for PollingTrigger {
    fn poll<'a>(&'a self, ctx: &'a RequestContext<'a>) -> BoxFuture<'a, Vec<Value>, BridgeError> {
        Box::pin(PollingTrigger::perform(self, ctx))
    }
}
