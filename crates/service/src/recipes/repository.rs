use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::recipes::domain::{Recipe, RecipeInput};

/// Trait abstraction for recipe storage.
///
/// Every method is one atomic operation on the store; callers never hold a
/// lock across calls.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Assign id and timestamp, append, return the stored record.
    async fn create(&self, input: RecipeInput) -> Recipe;
    /// All recipes in store order.
    async fn list(&self) -> Vec<Recipe>;
    /// Recipes carrying `tag` (case-insensitive, exact), in store order.
    async fn search_by_tag(&self, tag: &str) -> Vec<Recipe>;
    async fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
