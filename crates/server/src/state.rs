use std::sync::Arc;

use service::recipes::RecipeStore;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}
