use sea_orm::*;
use uuid::Uuid;

use crate::models::product;

/// Example catalog inserted into an empty store: (name, brand, price)
pub const CATALOG: [(&str, &str, i32); 13] = [
    ("Iphone 6 64gb", "Apple", 680),
    ("Macbook pro 13'", "Apple", 1200),
    ("ProBook 450 G6 15.6'", "HP", 615),
    ("360 1030 13.3'", "HP", 1309),
    ("P2219H 21.5", "Dell", 129),
    ("UltraSharp U2412M 24", "Dell", 168),
    ("ProLiant MicroGen10 Server", "HP", 321),
    ("Enterprise ML350 Gen10 Server", "HP", 1591),
    ("R440 Server", "Dell", 1591),
    ("ThinkPad T14", "Lenovo", 1299),
    ("ThinkPad T11", "Dell", 999),
    ("Eizo 27' 4K", "Eizo", 1199),
    ("Elitebook G5 15'", "HP", 1322),
];

/// Seed the example catalog if the products table is empty.
///
/// Returns the number of inserted rows (0 when data was already present).
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let existing = product::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!("Already have {} products - no need to seed", existing);
        return Ok(0);
    }

    let now = chrono::Utc::now().to_rfc3339();
    let rows = CATALOG.iter().map(|(name, brand, price)| product::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set((*name).to_owned()),
        brand: Set((*brand).to_owned()),
        price: Set(*price),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
    });

    let inserted = product::Entity::insert_many(rows)
        .exec_without_returning(db)
        .await?;

    tracing::info!("Seeded {} example products", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let db = db::init_db("sqlite::memory:").await.expect("Failed to init DB");

        assert_eq!(seed_catalog(&db).await.unwrap(), CATALOG.len() as u64);
        assert_eq!(seed_catalog(&db).await.unwrap(), 0);
        assert_eq!(
            product::Entity::find().count(&db).await.unwrap(),
            CATALOG.len() as u64
        );
    }

    #[tokio::test]
    async fn skips_store_with_any_row() {
        let db = db::init_db("sqlite::memory:").await.expect("Failed to init DB");
        let now = chrono::Utc::now().to_rfc3339();
        product::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set("Xperia".to_owned()),
            brand: Set("Sony".to_owned()),
            price: Set(699),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        }
        .insert(&db)
        .await
        .unwrap();

        assert_eq!(seed_catalog(&db).await.unwrap(), 0);
        assert_eq!(product::Entity::find().count(&db).await.unwrap(), 1);
    }
}
