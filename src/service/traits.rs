//! Trait abstraction for the asset service to enable mocking in tests

use super::error::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of `POST /api/assets`, built fresh from the form at submit time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssetRequest {
    pub name: String,
    pub price: f64,
}

/// Whatever the service returned on success, kept opaque
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateAssetResponse(pub Value);

impl CreateAssetResponse {
    /// Identifier of the created asset, if the body carries one
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Interpret a raw response body.
    ///
    /// An empty body becomes `null` and a body that is not JSON is kept as a
    /// JSON string, so a 2xx is never turned into a failure here.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self(Value::Null);
        }
        match serde_json::from_str(body) {
            Ok(value) => Self(value),
            Err(_) => Self(Value::String(body.to_string())),
        }
    }
}

impl fmt::Display for CreateAssetResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for asset service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetService: Send + Sync {
    /// Create a new asset
    async fn create_asset(
        &self,
        request: &CreateAssetRequest,
    ) -> Result<CreateAssetResponse, ServiceError>;
}
