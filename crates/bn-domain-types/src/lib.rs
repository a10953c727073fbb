//! Domain types for the BarberNet marketplace client
//!
//! This crate contains the core domain types that are shared across
//! different parts of the BarberNet client, including the REST client,
//! the in-process stores, and the CLI.
//!
//! These types represent the business domain entities and should be
//! UI-agnostic, reusable across different contexts.

pub mod city;
pub mod job;
pub mod price;

// Re-export commonly used types
pub use city::*;
pub use job::*;
pub use price::*;
