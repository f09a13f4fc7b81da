use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::ServiceError;
use crate::recipes::domain::{new_recipe_id, published_now, Recipe, RecipeInput};
use crate::recipes::repository::RecipeStore;
use crate::storage::json_seed::{read_json_array, BootstrapOutcome};

/// Process-local recipe store.
///
/// Keeps recipes in insertion order; deletions shift later entries left.
/// Lookups by id are linear scans.
#[derive(Default)]
pub struct MemoryRecipeStore {
    inner: RwLock<Vec<Recipe>>,
}

impl MemoryRecipeStore {
    /// Empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store seeded with `recipes` in the given order.
    ///
    /// Records with an empty or already-seen id are given a fresh one.
    pub fn with_recipes(mut recipes: Vec<Recipe>) -> Arc<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in recipes.iter_mut() {
            if recipe.id.is_empty() || seen.contains(&recipe.id) {
                let fresh = new_recipe_id();
                warn!(old_id = %recipe.id, new_id = %fresh, name = %recipe.name, "seed recipe id empty or duplicated; reassigned");
                recipe.id = fresh;
            }
            seen.insert(recipe.id.clone());
        }
        Arc::new(Self { inner: RwLock::new(recipes) })
    }

    /// Seed from the bootstrap file at `path`.
    ///
    /// A missing or malformed file yields an empty store plus a warning; the
    /// outcome tells the caller which case happened.
    pub async fn bootstrap<P: AsRef<Path>>(path: P) -> (Arc<Self>, BootstrapOutcome) {
        let path = path.as_ref();
        match read_json_array::<Recipe, _>(path).await {
            Ok(Some(recipes)) => {
                let count = recipes.len();
                info!(path = %path.display(), count, "recipes seeded from bootstrap file");
                (Self::with_recipes(recipes), BootstrapOutcome::Loaded { count })
            }
            Ok(None) => {
                warn!(path = %path.display(), "bootstrap file not found; starting with empty store");
                (Self::new(), BootstrapOutcome::Missing)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(path = %path.display(), error = %reason, "bootstrap file invalid; starting with empty store");
                (Self::new(), BootstrapOutcome::Invalid { reason })
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn create(&self, input: RecipeInput) -> Recipe {
        let recipe = Recipe::from_input(input, new_recipe_id(), published_now());
        let mut recipes = self.inner.write().await;
        recipes.push(recipe.clone());
        debug!(recipe_id = %recipe.id, total = recipes.len(), "recipe created");
        recipe
    }

    async fn list(&self) -> Vec<Recipe> {
        self.inner.read().await.clone()
    }

    async fn search_by_tag(&self, tag: &str) -> Vec<Recipe> {
        let recipes = self.inner.read().await;
        recipes.iter().filter(|r| r.has_tag(tag)).cloned().collect()
    }

    async fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, ServiceError> {
        let mut recipes = self.inner.write().await;
        let slot = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("recipe"))?;
        slot.apply(input);
        debug!(recipe_id = %id, "recipe updated");
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut recipes = self.inner.write().await;
        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("recipe"))?;
        recipes.remove(index);
        debug!(recipe_id = %id, total = recipes.len(), "recipe deleted");
        Ok(())
    }
}
