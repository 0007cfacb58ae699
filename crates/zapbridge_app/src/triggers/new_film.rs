// --- File: crates/zapbridge_app/src/triggers/new_film.rs ---
use serde_json::json;
use zapbridge_triggers::{Display, ScopedTrigger, TriggerDescriptor};

pub const KEY: &str = "new_film";

/// Polling trigger backed by the trigger-scoped list endpoint, so the
/// partner can serve canned data while the user configures the Zap.
pub fn descriptor() -> TriggerDescriptor {
    TriggerDescriptor::polling(
        KEY,
        "Film",
        Display::new("New Film", "Triggers when a new film is released (polling).").important(),
        ScopedTrigger::new(KEY),
        json!({
            "id": 1,
            "title": "Ivan the Terrible",
            "director": "Sergei Eisenstein",
            "release_date": "1944-12-30"
        }),
    )
}
