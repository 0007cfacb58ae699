// --- File: crates/zapbridge_app/src/triggers/new_book.rs ---
use serde_json::json;
use zapbridge_triggers::{Display, RestHook, TriggerDescriptor};

pub const KEY: &str = "new_book";

/// REST-hook trigger: fires once per published book, delivered by the
/// partner to the subscribed hook URL.
pub fn descriptor() -> TriggerDescriptor {
    TriggerDescriptor::hook(
        KEY,
        "Book",
        Display::new("New Book", "Triggers when a book is published."),
        RestHook::new(KEY),
        json!({
            "id": "123456",
            "authorName": "Arthur Conan Doyle",
            "bookTitle": "Hound of the Baskervilles",
            "publishedYear": 1902
        }),
    )
}
