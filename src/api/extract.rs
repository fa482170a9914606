//! Request extractors that report bad input as field-level 400s
//!
//! axum's own `Path` and `Json` rejections answer with plain text (and 422
//! for a well-formed body of the wrong shape). These wrappers turn every such
//! failure into the same JSON validation body the service errors use.

use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::Response,
};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use super::products::error_response;
use crate::domain::{CreateProductInput, DomainError, FieldError, UpdateProductInput};

pub const ID_NOT_UUID: &str = "The product id must be a UUID.";
pub const BODY_NOT_JSON: &str = "The request body must be a JSON object.";
pub const PRICE_NOT_INTEGER: &str = "The Price field must be a whole number between 1 and 2147483647.";

fn rejected(field: &str, message: impl Into<String>) -> Response {
    error_response(DomainError::Validation(vec![FieldError::new(field, message)]))
}

/// Product id taken from the `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<Uuid>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ProductId(id)),
            Err(rejection) => {
                tracing::debug!("Rejected product id: {}", rejection.body_text());
                Err(rejected("id", ID_NOT_UUID))
            }
        }
    }
}

/// Product fields sent to create or update; omitted or null fields are `None`
#[derive(Debug, Default, Clone, PartialEq, Eq, ToSchema)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<i32>,
}

fn text_field(
    body: &Map<String, Value>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                field,
                format!("The {} field must be a string.", label),
            ));
            None
        }
    }
}

fn price_field(body: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<i32> {
    match body.get("price") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let price = value.as_i64().and_then(|n| i32::try_from(n).ok());
            if price.is_none() {
                errors.push(FieldError::new("price", PRICE_NOT_INTEGER));
            }
            price
        }
    }
}

impl ProductPayload {
    /// Read the known fields from a decoded body, collecting every type mismatch.
    pub fn from_value(value: Value) -> Result<Self, Vec<FieldError>> {
        let Value::Object(body) = value else {
            return Err(vec![FieldError::new("body", BODY_NOT_JSON)]);
        };

        let mut errors = Vec::new();
        let payload = ProductPayload {
            name: text_field(&body, "name", "Name", &mut errors),
            brand: text_field(&body, "brand", "Brand", &mut errors),
            price: price_field(&body, &mut errors),
        };

        if errors.is_empty() { Ok(payload) } else { Err(errors) }
    }
}

#[async_trait]
impl<S> FromRequest<S> for ProductPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| rejected("body", rejection.body_text()))?;

        ProductPayload::from_value(value)
            .map_err(|errors| error_response(DomainError::Validation(errors)))
    }
}

impl From<ProductPayload> for CreateProductInput {
    fn from(payload: ProductPayload) -> Self {
        CreateProductInput {
            name: payload.name,
            brand: payload.brand,
            price: payload.price,
        }
    }
}

impl From<ProductPayload> for UpdateProductInput {
    fn from(payload: ProductPayload) -> Self {
        UpdateProductInput {
            name: payload.name,
            brand: payload.brand,
            price: payload.price,
        }
    }
}
