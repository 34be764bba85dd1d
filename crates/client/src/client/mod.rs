//! HTTP client for the lexscopic API.

pub mod events;
pub mod health;

use reqwest::redirect::Policy;

use crate::error::{ClientError, Result};

/// HTTP client for the lexscopic API.
#[derive(Debug, Clone)]
pub struct LexscopicClient {
    client: reqwest::Client,
    base_url: String,
}

impl LexscopicClient {
    /// Create a new client with the given base URL.
    ///
    /// Redirects are not followed so the calendar route's target can be read.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment (LEXSCOPIC_URL or default).
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("LEXSCOPIC_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_response(response, resource).await)
        }
    }
}

/// Build an error for a non-success response.
async fn error_from_response(response: reqwest::Response, resource: &str) -> ClientError {
    let status = response.status();
    if status.as_u16() == 404 {
        return ClientError::NotFound {
            resource: resource.to_string(),
        };
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError {
        status: status.as_u16(),
        message,
    }
}
