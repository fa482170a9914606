//! Presentation layer - what the web client does with the API
//!
//! Rendering stays outside this crate. This module holds the table view
//! model (filter + sort), the REST client, and the mutation workflows.

pub mod browser;
pub mod client;
pub mod table;

pub use browser::ProductBrowser;
pub use client::{ClientError, ProductsClient};
pub use table::{ProductTable, SortColumn, SortDirection, SortState, display};
