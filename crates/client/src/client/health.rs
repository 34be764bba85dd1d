//! Health check operations.

use serde::{Deserialize, Serialize};

use super::{error_from_response, LexscopicClient};
use crate::error::Result;

/// Server health status.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub events: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LexscopicClient {
    /// Liveness probe. Succeeds if the server answers 200.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response, "/livez").await)
        }
    }

    /// Health status with the current event count.
    ///
    /// An unhealthy server answers 503 with the same body, so it is decoded
    /// rather than treated as an error.
    pub async fn healthz(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        if response.status().as_u16() == 503 {
            return Ok(response.json().await?);
        }
        self.handle_response(response, "/healthz").await
    }
}
