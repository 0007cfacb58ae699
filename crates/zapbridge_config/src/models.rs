// --- File: crates/zapbridge_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Partner API Config ---
// Holds non-secret API settings only. User credentials are injected per call
// by the automation platform and must never be read from configuration.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // Loaded via ZAPBRIDGE_API__BASE_URL or BASE_API_URL
    pub timeout_secs: Option<u64>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}
