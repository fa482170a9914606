//! Create/edit/delete workflows of the product table.
//!
//! Every successful mutation is followed by a full re-list; the table is
//! only ever updated from that re-list, never patched locally.

use uuid::Uuid;

use super::client::{ClientError, ProductsClient};
use super::table::{ProductTable, SortColumn};
use crate::domain::validation::{validate_changes, validate_new_product};
use crate::domain::{CreateProductInput, Product, UpdateProductInput};

pub struct ProductBrowser {
    client: ProductsClient,
    table: ProductTable,
}

impl ProductBrowser {
    pub fn new(client: ProductsClient) -> Self {
        Self {
            client,
            table: ProductTable::new(),
        }
    }

    pub fn table(&self) -> &ProductTable {
        &self.table
    }

    /// Re-fetch the full list
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let products = self.client.list().await?;
        tracing::debug!("Fetched {} products", products.len());
        self.table.replace_products(products);
        Ok(())
    }

    pub fn search(&mut self, query: &str) {
        self.table.set_query(query);
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.table.toggle_sort(column);
    }

    pub fn rows(&self) -> Vec<Product> {
        self.table.rows()
    }

    /// Submit the create form. Invalid input is rejected before any request.
    ///
    /// Once the server has stored the product it is returned even if the
    /// following re-list fails; the table then keeps its previous rows until
    /// the next successful `refresh`.
    pub async fn create(&mut self, input: CreateProductInput) -> Result<Product, ClientError> {
        validate_new_product(&input).map_err(ClientError::Validation)?;

        let created = self.client.create(&input).await?;
        if let Err(e) = self.refresh().await {
            tracing::warn!("Created product {} but could not reload the list: {}", created.id, e);
        }
        Ok(created)
    }

    /// Submit the edit form. Invalid supplied fields are rejected locally.
    pub async fn edit(&mut self, id: Uuid, input: UpdateProductInput) -> Result<(), ClientError> {
        validate_changes(&input).map_err(ClientError::Validation)?;

        self.client.update(id, &input).await?;
        self.refresh().await
    }

    /// Confirm deletion
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.client.delete(id).await?;
        self.refresh().await
    }
}
