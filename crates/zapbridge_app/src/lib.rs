// --- File: crates/zapbridge_app/src/lib.rs ---
// Declare modules within this crate
pub mod authentication;
pub mod manifest;
pub mod triggers;
#[cfg(test)]
mod manifest_test;

pub use authentication::{authentication, verify_credentials, Authentication};
pub use manifest::{app, App, AppBuilder};
