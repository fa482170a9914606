//! Product Service - Pure business logic without HTTP layer

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::validation::{validate_new_product, validate_product};
use crate::domain::{
    CreateProductInput, DomainError, Product, ProductRepository, UpdateProductInput,
};

pub const SAVE_FAILED: &str = "Could not save changes to the database";
pub const UPDATE_FAILED: &str = "Could not update the product";
pub const DELETE_FAILED: &str = "Could not delete the product";

/// Result of an update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The merged record differed and was written
    Updated(Product),
    /// Nothing changed, the store was not touched
    Unchanged(Product),
}

impl UpdateOutcome {
    pub fn product(&self) -> &Product {
        match self {
            UpdateOutcome::Updated(p) | UpdateOutcome::Unchanged(p) => p,
        }
    }
}

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// List all products ordered by name
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a single product by ID
    pub async fn get(&self, id: Uuid) -> Result<Product, DomainError> {
        self.repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
    }

    /// Validate and insert a new product with a fresh id
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, DomainError> {
        let fields = validate_new_product(&input).map_err(DomainError::Validation)?;

        let product = Product {
            id: Uuid::new_v4(),
            name: fields.name,
            brand: fields.brand,
            price: fields.price,
        };

        if self.repo.insert(&product).await? == 0 {
            tracing::warn!("Insert of product {} affected no rows", product.id);
            return Err(DomainError::PersistenceFailure(SAVE_FAILED.to_string()));
        }

        tracing::info!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Apply a partial update. Omitted fields keep their current value.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateProductInput,
    ) -> Result<UpdateOutcome, DomainError> {
        let current = self.get(id).await?;
        let merged = input.merge_into(&current);

        validate_product(&merged).map_err(DomainError::Validation)?;

        if merged == current {
            tracing::debug!("Update of product {} changed nothing", id);
            return Ok(UpdateOutcome::Unchanged(current));
        }

        if self.repo.update(&merged).await? == 0 {
            tracing::warn!("Update of product {} affected no rows", id);
            return Err(DomainError::PersistenceFailure(UPDATE_FAILED.to_string()));
        }

        tracing::info!("Updated product {}", id);
        Ok(UpdateOutcome::Updated(merged))
    }

    /// Permanently remove a product
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.get(id).await?;

        if self.repo.delete(id).await? == 0 {
            tracing::warn!("Delete of product {} affected no rows", id);
            return Err(DomainError::PersistenceFailure(DELETE_FAILED.to_string()));
        }

        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}
