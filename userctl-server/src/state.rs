//! Application state shared across handlers

use std::sync::Arc;

use crate::db::UserStore;

/// Shared application state.
///
/// Cloned into every request; clones share one store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}

impl<S> From<Arc<S>> for AppState
where
    S: UserStore + 'static,
{
    fn from(store: Arc<S>) -> Self {
        Self::new(store)
    }
}
