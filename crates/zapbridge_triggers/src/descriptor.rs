// --- File: crates/zapbridge_triggers/src/descriptor.rs ---
//! Trigger descriptors: the static records the automation platform ingests.
//!
//! A descriptor combines display metadata with exactly one operation style,
//! either a REST-hook lifecycle (subscribe / unsubscribe / list / perform)
//! or a schedule-driven polling perform. The enum makes mixing the two
//! styles unrepresentable.

use crate::context::RequestContext;
use crate::subscription::SubscriptionRecord;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;
use zapbridge_common::{BoxFuture, BridgeError};

/// The fixed operation set of a webhook-style trigger.
///
/// Implementors are small value types holding the event name; the context
/// carries everything else, so implementations stay stateless between calls.
pub trait HookOps: Send + Sync {
    /// Handles one delivered webhook payload. No I/O: wraps the payload in a
    /// one-element list, or fails when nothing was delivered.
    fn perform(
        &self,
        ctx: &RequestContext<'_>,
        inbound: Option<Value>,
    ) -> Result<Vec<Value>, BridgeError>;

    /// Creates a subscription pointing at `target_url`.
    fn subscribe<'a>(
        &'a self,
        ctx: &'a RequestContext<'a>,
        target_url: &'a str,
    ) -> BoxFuture<'a, SubscriptionRecord, BridgeError>;

    /// Deletes the subscription identified by `subscription_id`. Not
    /// idempotent: a second call surfaces the partner's error unchanged.
    fn unsubscribe<'a>(
        &'a self,
        ctx: &'a RequestContext<'a>,
        subscription_id: &'a str,
    ) -> BoxFuture<'a, Value, BridgeError>;

    /// Fetches recent items, used for the platform's sample-data UX.
    fn list<'a>(&'a self, ctx: &'a RequestContext<'a>) -> BoxFuture<'a, Vec<Value>, BridgeError>;
}

/// The single operation of a polling-style trigger, invoked on a
/// platform-managed schedule.
pub trait PollOps: Send + Sync {
    fn poll<'a>(&'a self, ctx: &'a RequestContext<'a>) -> BoxFuture<'a, Vec<Value>, BridgeError>;
}

/// Display metadata shown in the platform's trigger picker.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Display {
    pub label: String,
    pub description: String,
    pub hidden: bool,
    pub important: bool,
}

impl Display {
    pub fn new(label: &str, description: &str) -> Self {
        Display {
            label: label.to_string(),
            description: description.to_string(),
            hidden: false,
            important: false,
        }
    }

    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Relabels one key of the polled records in the platform UI.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OutputField {
    pub key: String,
    pub label: String,
}

/// The operation bundle of a descriptor. Exactly one style is wired.
#[derive(Clone)]
pub enum Operation {
    Hook {
        ops: Arc<dyn HookOps>,
        sample: Value,
    },
    Polling {
        ops: Arc<dyn PollOps>,
        sample: Value,
        output_fields: Vec<OutputField>,
    },
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Hook { .. } => "hook",
            Operation::Polling { .. } => "polling",
        }
    }

    /// The sample payload shown to the user while configuring the trigger.
    pub fn sample(&self) -> &Value {
        match self {
            Operation::Hook { sample, .. } => sample,
            Operation::Polling { sample, .. } => sample,
        }
    }
}

/// A complete trigger record: key, display metadata and operation bundle.
#[derive(Clone)]
pub struct TriggerDescriptor {
    pub key: String,
    pub noun: String,
    pub display: Display,
    pub operation: Operation,
}

impl TriggerDescriptor {
    /// Builds a REST-hook style descriptor.
    pub fn hook(
        key: &str,
        noun: &str,
        display: Display,
        ops: impl HookOps + 'static,
        sample: Value,
    ) -> Self {
        TriggerDescriptor {
            key: key.to_string(),
            noun: noun.to_string(),
            display,
            operation: Operation::Hook {
                ops: Arc::new(ops),
                sample,
            },
        }
    }

    /// Builds a polling style descriptor.
    pub fn polling(
        key: &str,
        noun: &str,
        display: Display,
        ops: impl PollOps + 'static,
        sample: Value,
    ) -> Self {
        TriggerDescriptor {
            key: key.to_string(),
            noun: noun.to_string(),
            display,
            operation: Operation::Polling {
                ops: Arc::new(ops),
                sample,
                output_fields: Vec::new(),
            },
        }
    }

    /// Adds an output-field relabel. Only meaningful for polling
    /// descriptors; configuring one on a hook descriptor is ignored.
    pub fn with_output_field(mut self, key: &str, label: &str) -> Self {
        match &mut self.operation {
            Operation::Polling { output_fields, .. } => output_fields.push(OutputField {
                key: key.to_string(),
                label: label.to_string(),
            }),
            Operation::Hook { .. } => {
                warn!(trigger = %self.key, "output fields are not supported on hook triggers");
            }
        }
        self
    }

    pub fn is_hook(&self) -> bool {
        matches!(self.operation, Operation::Hook { .. })
    }
}
