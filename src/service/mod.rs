//! Asset service module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::{AssetClient, DEFAULT_ADDRESS};
pub use error::ServiceError;
pub use traits::{AssetService, CreateAssetRequest, CreateAssetResponse};

#[cfg(test)]
pub use traits::MockAssetService;
