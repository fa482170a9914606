//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::domain::{DomainError, Product, ProductRepository};
use crate::models::product::{self, Column, Entity as ProductEntity};

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = ProductEntity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        products.into_iter().map(Product::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let product = ProductEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        product.map(Product::try_from).transpose()
    }

    async fn insert(&self, product: &Product) -> Result<u64, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let rows = ProductEntity::insert(product::new_active_model(product, &now))
            .exec_without_returning(&self.db)
            .await?;

        Ok(rows)
    }

    async fn update(&self, product: &Product) -> Result<u64, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let result = ProductEntity::update_many()
            .set(product::changes_active_model(product, &now))
            .filter(Column::Id.eq(product.id.to_string()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let result = ProductEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
