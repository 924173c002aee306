use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// A stored recipe. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Create/update payload. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl RecipeInput {
    pub fn new<N, I, S>(name: N, ingredients: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// `name` is required: it must not be blank.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::Validation("name must not be empty".into()));
        }
        Ok(())
    }

    pub(crate) fn into_recipe(self, id: Uuid) -> Recipe {
        Recipe { id, name: self.name, ingredients: self.ingredients }
    }
}
