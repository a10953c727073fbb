//! BarberNet REST API contract types and validation
//!
//! This crate defines the schema types and validation for the REST API
//! consumed by the BarberNet client. These types are shared between the
//! REST client, the in-process stores, and the CLI.

pub mod error;
pub mod images;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
