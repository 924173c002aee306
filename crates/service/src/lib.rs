//! Service layer for the recipes resource.
//! - `recipes` holds the domain types and the store handlers talk to.
//! - `storage` provides the in-memory map the store is built on.

pub mod errors;
pub mod recipes;
pub mod storage;
