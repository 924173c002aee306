use std::sync::Arc;

use configs::AppConfig;
use service::recipes::{RecipeRepository, RecipeStore};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeRepository>,
}

impl AppState {
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { recipes }
    }

    /// Fresh in-memory store, seeded unless `recipes.seed` is off.
    pub async fn from_config(cfg: &AppConfig) -> Self {
        let store = if cfg.recipes.seed { RecipeStore::seeded().await } else { RecipeStore::new() };
        Self::new(store)
    }
}
