//! Storage abstractions for service layer
//!
//! Process-local stores; nothing here outlives the process.

pub mod memory_map_store;
