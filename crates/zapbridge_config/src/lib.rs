// --- File: crates/zapbridge_config/src/lib.rs ---

pub mod models;

pub use models::{ApiConfig, AppConfig};

use config::{Config, ConfigError, Environment, File};
use std::sync::Once;

static DOTENV: Once = Once::new();

/// Loads `.env` exactly once per process. Safe to call from every crate that
/// touches configuration.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the app configuration.
///
/// Sources, later ones winning: an optional `config/default.*` file,
/// `ZAPBRIDGE_*` environment variables (e.g. `ZAPBRIDGE_API__BASE_URL`), and
/// finally the bare `BASE_API_URL` variable kept for parity with existing
/// deployments.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let mut builder = Config::builder()
        .set_default("api.timeout_secs", 30u64)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("ZAPBRIDGE").separator("__"));
    if let Ok(base_url) = std::env::var("BASE_API_URL") {
        builder = builder.set_override("api.base_url", base_url)?;
    }
    builder.build()?.try_deserialize()
}
