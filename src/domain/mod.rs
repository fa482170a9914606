//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, validation rules and domain error types.

pub mod errors;
pub mod repositories;
pub mod validation;

pub use errors::{DomainError, FieldError};
pub use repositories::*;
