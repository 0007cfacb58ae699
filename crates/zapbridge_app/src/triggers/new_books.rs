// --- File: crates/zapbridge_app/src/triggers/new_books.rs ---
use serde_json::json;
use zapbridge_triggers::{Display, PollingTrigger, TriggerDescriptor};

pub const KEY: &str = "new_books";

/// Polling trigger: the platform calls perform on its own schedule and the
/// partner endpoint decides what counts as "new".
pub fn descriptor() -> TriggerDescriptor {
    TriggerDescriptor::polling(
        KEY,
        "Book",
        Display::new("New Books", "Polls for new books.").important(),
        PollingTrigger::new(KEY),
        json!({
            "id": 1,
            "author": "Arthur Conan Doyle",
            "title": "Hound of the Baskervilles",
            "published": 1902
        }),
    )
    // override the label to make it more meaningful
    .with_output_field("published", "Year of publication")
}
