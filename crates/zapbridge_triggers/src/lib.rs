// --- File: crates/zapbridge_triggers/src/lib.rs ---
// Declare modules within this crate
pub mod context;
pub mod descriptor;
pub mod polling;
pub mod subscription;
pub mod trigger;
#[cfg(test)]
mod descriptor_test;
#[cfg(test)]
mod trigger_test;

pub use context::{Credentials, RequestContext, RequestMeta};
pub use descriptor::{Display, HookOps, Operation, OutputField, PollOps, TriggerDescriptor};
pub use polling::PollingTrigger;
pub use subscription::{RestHook, SubscriptionRecord};
pub use trigger::ScopedTrigger;
