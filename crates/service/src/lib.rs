//! Service layer for the recipes API.
//! - Owns the recipe domain types and the store abstraction.
//! - Keeps HTTP concerns out; handlers map `ServiceError` to responses.

pub mod errors;
pub mod recipes;
pub mod storage;
