// --- File: crates/zapbridge_app/src/triggers/mod.rs ---
//! The shipped trigger definitions: one descriptor per partner event.

pub mod new_book;
pub mod new_books;
pub mod new_film;
