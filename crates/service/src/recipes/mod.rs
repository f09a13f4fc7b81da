//! Recipe module: domain types, the store abstraction and its in-memory implementation.
//!
//! Handlers only ever see `Arc<dyn RecipeStore>`; the concrete store is picked at startup.

pub mod domain;
pub mod repository;
pub mod memory;

pub use domain::{Recipe, RecipeInput};
pub use memory::MemoryRecipeStore;
pub use repository::RecipeStore;
