//! Storage helpers for the service layer
//!
//! File readers used to seed in-memory stores at startup.

pub mod json_seed;
