//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod product_service;

// Re-export for convenience
pub use product_service::{ProductService, UpdateOutcome};
