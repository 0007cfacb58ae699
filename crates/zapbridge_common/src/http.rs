// --- File: crates/zapbridge_common/src/http.rs ---
//! HTTP utilities shared by every crate that talks to the partner API.

pub mod client;

pub use client::{create_client, expect_json, expect_json_array, HTTP_CLIENT};
