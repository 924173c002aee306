use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::recipes::domain::{Recipe, RecipeInput};

/// Trait abstraction for recipe storage, so handlers don't depend on the
/// concrete store.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn list(&self) -> Vec<Recipe>;
    async fn get(&self, id: Uuid) -> Option<Recipe>;
    async fn create(&self, input: RecipeInput) -> Result<Recipe, ServiceError>;
    async fn update(&self, id: Uuid, input: RecipeInput) -> Result<Recipe, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
