// --- File: crates/zapbridge_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{config_error, invalid_payload, BridgeError};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, expect_json, expect_json_array, HTTP_CLIENT};

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result.
///
/// Used at the trait seams of the trigger operation sets so the descriptors
/// can hold operations as plain trait objects.
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;
