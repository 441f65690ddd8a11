//! HTTP client for the asset service
//!
//! Sends creation requests to `POST /api/assets` and hands the response body
//! back untouched.

use super::error::ServiceError;
use super::traits::{AssetService, CreateAssetRequest, CreateAssetResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Default service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8080";

/// Path of the creation endpoint, relative to the service address
const ASSETS_PATH: &str = "/api/assets";

/// Client for the external asset service
#[derive(Debug, Clone)]
pub struct AssetClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AssetClient {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ASSETS_PATH),
        })
    }

    /// Full URL creation requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssetService for AssetClient {
    async fn create_asset(
        &self,
        request: &CreateAssetRequest,
    ) -> Result<CreateAssetResponse, ServiceError> {
        tracing::debug!(endpoint = %self.endpoint, name = %request.name, price = request.price, "POST asset");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(CreateAssetResponse::from_body(&body))
    }
}
