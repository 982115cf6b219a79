//! Application state for the ground-handling cost engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TariffStore;

/// Shared application state.
///
/// Contains the loaded tariff store, which is read-only after
/// initialization and safe to share across request handlers without
/// coordination.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tariff store.
    store: Arc<TariffStore>,
}

impl AppState {
    /// Creates a new application state with the given tariff store.
    pub fn new(store: TariffStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the tariff store.
    pub fn store(&self) -> &TariffStore {
        &self.store
    }
}
