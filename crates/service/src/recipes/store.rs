use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::recipes::domain::{Recipe, RecipeInput};
use crate::recipes::repository::RecipeRepository;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory recipe collection keyed by id, in creation order.
#[derive(Clone)]
pub struct RecipeStore {
    store: Arc<MemoryMapStore<Uuid, Recipe>>,
}

impl RecipeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { store: MemoryMapStore::new() })
    }

    /// Store pre-populated with the sample recipes.
    pub async fn seeded() -> Arc<Self> {
        let store = Self::new();
        store.seed().await;
        store
    }

    /// Append the sample recipes.
    pub async fn seed(&self) {
        let samples = [
            RecipeInput::new(
                "boiled white rice",
                ["1 cup white rice", "2 cups water", "pinch of salt"],
            ),
            RecipeInput::new(
                "milkshake",
                ["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
            ),
        ];
        for input in samples {
            self.insert_new(input).await;
        }
    }

    pub async fn list(&self) -> Vec<Recipe> {
        self.store.list().await.into_iter().map(|(_, v)| v).collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<Recipe> {
        self.store.get(&id).await
    }

    pub async fn create(&self, input: RecipeInput) -> Result<Recipe, ServiceError> {
        input.validate()?;
        Ok(self.insert_new(input).await)
    }

    /// Replace name and ingredients wholesale; `id` and position are kept.
    pub async fn update(&self, id: Uuid, input: RecipeInput) -> Result<Recipe, ServiceError> {
        input.validate()?;
        let RecipeInput { name, ingredients } = input;
        let updated = self
            .store
            .update(&id, move |existing| {
                existing.name = name;
                existing.ingredients = ingredients;
                existing.clone()
            })
            .await
            .ok_or_else(|| ServiceError::not_found("recipe"))?;
        debug!(recipe_id = %id, "recipe updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.store.remove(&id).await {
            return Err(ServiceError::not_found("recipe"));
        }
        debug!(recipe_id = %id, "recipe deleted");
        Ok(())
    }

    async fn insert_new(&self, input: RecipeInput) -> Recipe {
        // v4 collisions are not retried
        let rec = input.into_recipe(Uuid::new_v4());
        self.store.insert(rec.id, rec.clone()).await;
        debug!(recipe_id = %rec.id, name = %rec.name, "recipe created");
        rec
    }
}

#[async_trait]
impl RecipeRepository for RecipeStore {
    async fn list(&self) -> Vec<Recipe> { self.list().await }
    async fn get(&self, id: Uuid) -> Option<Recipe> { self.get(id).await }
    async fn create(&self, input: RecipeInput) -> Result<Recipe, ServiceError> { self.create(input).await }
    async fn update(&self, id: Uuid, input: RecipeInput) -> Result<Recipe, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> { self.delete(id).await }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recipe_store_crud() -> Result<(), anyhow::Error> {
        let store = RecipeStore::new();
        assert!(store.list().await.is_empty());

        // create
        let created = store.create(RecipeInput::new("pizza", ["dough", "sauce"])).await?;
        assert_eq!(created.name, "pizza");
        assert_eq!(created.ingredients, ["dough", "sauce"]);

        // list / get
        assert_eq!(store.list().await, vec![created.clone()]);
        assert_eq!(store.get(created.id).await, Some(created.clone()));

        // update replaces wholesale and keeps id
        let updated = store
            .update(created.id, RecipeInput::new("soup", ["broth", "mushrooms"]))
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "soup");
        assert_eq!(updated.ingredients, ["broth", "mushrooms"]);
        assert_eq!(store.get(created.id).await, Some(updated));

        // delete, then again
        store.delete(created.id).await?;
        assert!(store.get(created.id).await.is_none());
        assert!(matches!(store.delete(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_unique_and_order_is_creation_order() -> Result<(), anyhow::Error> {
        let store = RecipeStore::new();
        let a = store.create(RecipeInput::new("a", ["x"])).await?;
        let b = store.create(RecipeInput::new("b", ["y"])).await?;
        let c = store.create(RecipeInput::new("c", Vec::<String>::new())).await?;
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);

        store.update(a.id, RecipeInput::new("a2", ["z"])).await?;
        let names: Vec<String> = store.list().await.into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["a2", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = RecipeStore::new();
        let id = Uuid::new_v4();
        assert!(store.get(id).await.is_none());
        assert_eq!(
            store.update(id, RecipeInput::new("soup", ["broth"])).await,
            Err(ServiceError::not_found("recipe"))
        );
        assert_eq!(store.delete(id).await, Err(ServiceError::not_found("recipe")));
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_mutation() -> Result<(), anyhow::Error> {
        let store = RecipeStore::new();
        assert!(matches!(
            store.create(RecipeInput::new(" ", ["x"])).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(store.list().await.is_empty());

        let rec = store.create(RecipeInput::new("rice", ["water"])).await?;
        assert!(matches!(
            store.update(rec.id, RecipeInput::new("", Vec::<String>::new())).await,
            Err(ServiceError::Validation(_))
        ));
        assert_eq!(store.get(rec.id).await, Some(rec));
        Ok(())
    }

    #[tokio::test]
    async fn seeded_store_has_samples() {
        let store = RecipeStore::seeded().await;
        let names: Vec<String> = store.list().await.into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["boiled white rice", "milkshake"]);
    }

    #[tokio::test]
    async fn usable_through_trait_object() -> Result<(), anyhow::Error> {
        let repo: Arc<dyn RecipeRepository> = RecipeStore::new();
        let rec = repo.create(RecipeInput::new("tea", ["water", "leaves"])).await?;
        assert_eq!(repo.list().await.len(), 1);
        repo.delete(rec.id).await?;
        assert!(repo.list().await.is_empty());
        Ok(())
    }
}
