//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::DomainError;

/// Product data for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub price: i32,
}

/// Input for creating a product.
///
/// Every field is optional so that a missing field can be reported by
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<i32>,
}

/// Input for a partial product update. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
}

impl UpdateProductInput {
    /// Apply the supplied fields on top of `current`.
    pub fn merge_into(&self, current: &Product) -> Product {
        Product {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            brand: self.brand.clone().unwrap_or_else(|| current.brand.clone()),
            price: self.price.unwrap_or(current.price),
        }
    }
}

/// Repository trait for Product entity
///
/// Write methods return the number of affected rows; turning a zero into a
/// failure is the service's job.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find all products ordered by name ascending
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Insert a new product
    async fn insert(&self, product: &Product) -> Result<u64, DomainError>;

    /// Overwrite name, brand and price of an existing product
    async fn update(&self, product: &Product) -> Result<u64, DomainError>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probook() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "ProBook".to_string(),
            brand: "HP".to_string(),
            price: 615,
        }
    }

    #[test]
    fn merge_keeps_omitted_fields() {
        let current = probook();
        let merged = UpdateProductInput {
            price: Some(700),
            ..Default::default()
        }
        .merge_into(&current);

        assert_eq!(merged.id, current.id);
        assert_eq!(merged.name, "ProBook");
        assert_eq!(merged.brand, "HP");
        assert_eq!(merged.price, 700);
    }

    #[test]
    fn merge_distinguishes_empty_from_omitted() {
        let current = probook();
        let merged = UpdateProductInput {
            name: Some(String::new()),
            ..Default::default()
        }
        .merge_into(&current);

        assert_eq!(merged.name, "");
        assert_eq!(merged.brand, "HP");
    }

    #[test]
    fn empty_update_merges_to_current() {
        let current = probook();
        assert_eq!(UpdateProductInput::default().merge_into(&current), current);
    }
}
