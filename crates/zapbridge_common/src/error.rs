// --- File: crates/zapbridge_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all zapbridge operations.
///
/// No variant is ever recovered or retried locally. Every failure is surfaced
/// to the invoking platform, which owns user-facing presentation and any
/// retry/backoff policy.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The partner API answered with a non-2xx status. Status and body are
    /// carried unchanged.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The credential test call failed. The body is shown verbatim to the
    /// end user during account connection.
    #[error("credential test returned {status}: {body}")]
    InvalidCredentials { status: u16, body: String },

    /// The inbound webhook body was missing or malformed.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Transport-level failure from the HTTP client (timeout, DNS, TLS).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Missing or inconsistent configuration, e.g. a duplicate trigger key.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// The upstream status carried by this error, if it came from the
    /// partner API.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            BridgeError::Upstream { status, .. }
            | BridgeError::InvalidCredentials { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Utility constructors, mirrored across the workspace.
pub fn config_error<T: fmt::Display>(message: T) -> BridgeError {
    BridgeError::Config(message.to_string())
}

pub fn invalid_payload<T: fmt::Display>(message: T) -> BridgeError {
    BridgeError::InvalidPayload(message.to_string())
}
