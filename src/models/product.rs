use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, Product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String, // UUID text
    pub name: String,
    pub brand: String,
    pub price: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Product {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&model.id)
            .map_err(|e| DomainError::Database(format!("invalid product id '{}': {}", model.id, e)))?;

        Ok(Self {
            id,
            name: model.name,
            brand: model.brand,
            price: model.price,
        })
    }
}

/// Row for a brand new product, both timestamps set to `now`
pub fn new_active_model(product: &Product, now: &str) -> ActiveModel {
    ActiveModel {
        id: Set(product.id.to_string()),
        name: Set(product.name.clone()),
        brand: Set(product.brand.clone()),
        price: Set(product.price),
        created_at: Set(now.to_owned()),
        updated_at: Set(now.to_owned()),
    }
}

/// Changes applied by an update; id and created_at are left untouched
pub fn changes_active_model(product: &Product, now: &str) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(product.name.clone()),
        brand: Set(product.brand.clone()),
        price: Set(product.price),
        created_at: NotSet,
        updated_at: Set(now.to_owned()),
    }
}
