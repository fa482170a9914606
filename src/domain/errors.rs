//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single rejected field and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// One or more fields failed validation
    Validation(Vec<FieldError>),
    /// The store accepted the statement but reported no affected rows
    PersistenceFailure(String),
    /// Database/driver error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "Validation error: {}", messages.join("; "))
            }
            DomainError::PersistenceFailure(msg) => write!(f, "{}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
