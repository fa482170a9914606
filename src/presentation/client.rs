//! REST client for the products API, used by the web client workflows

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{CreateProductInput, FieldError, Product, UpdateProductInput};

#[derive(Debug)]
pub enum ClientError {
    /// 404 from the server
    NotFound,
    /// Field-level rejection, either local or from the server
    Validation(Vec<FieldError>),
    /// 400 without field errors: the server could not save
    PersistenceFailure(String),
    /// Any other unexpected status
    Status(u16, String),
    /// Connection or decoding failure
    Transport(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NotFound => write!(f, "Product not found"),
            ClientError::Validation(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "Validation error: {}", messages.join("; "))
            }
            ClientError::PersistenceFailure(msg) => write!(f, "{}", msg),
            ClientError::Status(code, msg) => write!(f, "Unexpected status {}: {}", code, msg),
            ClientError::Transport(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Clone)]
pub struct ProductsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductsClient {
    /// `base_url` is the server root, e.g. `http://localhost:8000`
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    /// Turn a non-success response into the matching error kind
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();

        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound,
            StatusCode::BAD_REQUEST if !body.errors.is_empty() => {
                ClientError::Validation(body.errors)
            }
            StatusCode::BAD_REQUEST if !body.error.is_empty() => {
                ClientError::PersistenceFailure(body.error)
            }
            other if body.error.is_empty() => ClientError::Status(other.as_u16(), text),
            other => ClientError::Status(other.as_u16(), body.error),
        })
    }

    pub async fn list(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.http.get(self.collection_url()).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Product, ClientError> {
        let response = self.http.get(self.item_url(id)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create(&self, input: &CreateProductInput) -> Result<Product, ClientError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update(&self, id: Uuid, input: &UpdateProductInput) -> Result<(), ClientError> {
        let response = self.http.put(self.item_url(id)).json(input).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
