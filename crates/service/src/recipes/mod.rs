//! Recipes: domain types, the repository trait handlers depend on, and the
//! in-memory store implementing it.

pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{Recipe, RecipeInput};
pub use repository::RecipeRepository;
pub use store::RecipeStore;
