//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::ProductRepository;
use crate::infrastructure::SeaOrmProductRepository;
use crate::services::ProductService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Product repository
    pub product_repo: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let product_repo = Arc::new(SeaOrmProductRepository::new(db.clone()));

        Self { db, product_repo }
    }

    /// Build state around an explicit repository (e.g. a test double)
    pub fn with_repository(db: DatabaseConnection, product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { db, product_repo }
    }

    /// Product service bound to this state's repository
    pub fn products(&self) -> ProductService {
        ProductService::new(self.product_repo.clone())
    }
}

impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
