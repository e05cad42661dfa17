//! Shared application state for all routes.

use crate::store::BookStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The only shared resource; handlers hold no other cross-request state.
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new<S: BookStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
