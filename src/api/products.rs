//! Product API handlers using the product service

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use super::extract::{ProductId, ProductPayload};
use crate::domain::{DomainError, Product};
use crate::infrastructure::AppState;
use crate::services::UpdateOutcome;

pub const INTERNAL_ERROR: &str = "Internal server error";

/// Map a domain failure to its HTTP response
pub(crate) fn error_response(err: DomainError) -> Response {
    match err {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response(),
        DomainError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "One or more validation errors occurred",
                "errors": errors
            })),
        )
            .into_response(),
        DomainError::PersistenceFailure(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": msg}))).into_response()
        }
        DomainError::Database(msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": INTERNAL_ERROR})),
            )
                .into_response()
        }
    }
}

/// List all products ordered by name
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products ordered by name", body = [Product])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Response {
    match state.products().list().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a single product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_product(State(state): State<AppState>, ProductId(id): ProductId) -> Response {
    match state.products().get(id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation or save failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: ProductPayload,
) -> Response {
    match state.products().create(payload.into()).await {
        Ok(product) => {
            let location = format!("/api/products/{}", product.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(product),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated or already up to date"),
        (status = 400, description = "Validation or save failure"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    payload: ProductPayload,
) -> Response {
    match state.products().update(id, payload.into()).await {
        Ok(UpdateOutcome::Updated(_)) => (
            StatusCode::OK,
            Json(json!({"message": "Product updated successfully"})),
        )
            .into_response(),
        Ok(UpdateOutcome::Unchanged(_)) => (
            StatusCode::OK,
            Json(json!({"message": "No changes to apply"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Permanently delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Save failure"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn delete_product(State(state): State<AppState>, ProductId(id): ProductId) -> Response {
    match state.products().delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Product deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
