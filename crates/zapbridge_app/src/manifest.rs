// --- File: crates/zapbridge_app/src/manifest.rs ---
//! The app manifest: the single object the automation platform ingests.

use crate::authentication::{authentication, Authentication};
use crate::triggers::{new_book, new_books, new_film};
use std::collections::BTreeMap;
use zapbridge_common::{config_error, BridgeError};
use zapbridge_triggers::TriggerDescriptor;

/// The loaded manifest. Trigger keys are unique by construction; a collision
/// is a fatal configuration error at build time, never a runtime one.
pub struct App {
    pub version: &'static str,
    pub authentication: Authentication,
    triggers: BTreeMap<String, TriggerDescriptor>,
}

impl App {
    pub fn trigger(&self, key: &str) -> Option<&TriggerDescriptor> {
        self.triggers.get(key)
    }

    pub fn triggers(&self) -> impl Iterator<Item = &TriggerDescriptor> {
        self.triggers.values()
    }

    pub fn trigger_keys(&self) -> impl Iterator<Item = &str> {
        self.triggers.keys().map(String::as_str)
    }
}

/// Assembles an [`App`], rejecting duplicate trigger keys.
pub struct AppBuilder {
    authentication: Authentication,
    triggers: Vec<TriggerDescriptor>,
}

impl AppBuilder {
    pub fn new(authentication: Authentication) -> Self {
        AppBuilder {
            authentication,
            triggers: Vec::new(),
        }
    }

    pub fn trigger(mut self, descriptor: TriggerDescriptor) -> Self {
        self.triggers.push(descriptor);
        self
    }

    pub fn build(self) -> Result<App, BridgeError> {
        let mut triggers = BTreeMap::new();
        for descriptor in self.triggers {
            if triggers.contains_key(&descriptor.key) {
                return Err(config_error(format!(
                    "duplicate trigger key '{}'",
                    descriptor.key
                )));
            }
            triggers.insert(descriptor.key.clone(), descriptor);
        }
        Ok(App {
            version: env!("CARGO_PKG_VERSION"),
            authentication: self.authentication,
            triggers,
        })
    }
}

/// The manifest shipped with this crate: custom authentication plus the
/// `new_book` hook and the `new_books` / `new_film` polling triggers.
pub fn app() -> Result<App, BridgeError> {
    AppBuilder::new(authentication())
        .trigger(new_book::descriptor())
        .trigger(new_books::descriptor())
        .trigger(new_film::descriptor())
        .build()
}
