//! Submission of the create-asset form
//!
//! `submit_create` runs the whole cycle in place. The interactive UI uses the
//! split form instead (`begin`, `send`, `finish`) so the network call can run
//! on its own task while the event loop keeps drawing.

use crate::service::{AssetService, CreateAssetRequest, CreateAssetResponse, ServiceError};
use crate::state::{FormState, SubmitStatus};
use std::sync::Arc;
use thiserror::Error;

/// Coarse classification of a failed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Price input is not a number
    Parse,
    /// Another submission from the same form has not settled
    InFlight,
    /// Network failure, timeout or non-2xx response
    Transport,
}

/// Why a submission did not create an asset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("price {input:?} is not a number")]
    Parse { input: String },

    #[error("a submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Transport(#[from] ServiceError),
}

impl SubmitError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SubmitError::Parse { .. } => FailureKind::Parse,
            SubmitError::InFlight => FailureKind::InFlight,
            SubmitError::Transport(_) => FailureKind::Transport,
        }
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(CreateAssetResponse),
    Failure(SubmitError),
}

/// Drives a `FormState` through one submission against the asset service
#[derive(Clone)]
pub struct SubmitController {
    service: Arc<dyn AssetService>,
}

impl SubmitController {
    pub fn new(service: Arc<dyn AssetService>) -> Self {
        Self { service }
    }

    /// Submit the form and wait for the service to answer.
    ///
    /// On success the form is reset; on any failure its fields are left as
    /// they were.
    pub async fn submit_create(&self, form: &mut FormState) -> Outcome {
        let request = match self.begin(form) {
            Ok(request) => request,
            Err(err) => return self.reject(form, err),
        };
        let outcome = self.send(request).await;
        self.finish(form, &outcome);
        outcome
    }

    /// Take the payload snapshot and mark the form as submitting
    pub fn begin(&self, form: &mut FormState) -> Result<CreateAssetRequest, SubmitError> {
        if form.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        let request = form.snapshot();
        // Non-finite prices serialize as JSON null
        if !request.price.is_finite() {
            return Err(SubmitError::Parse {
                input: form.price_text().to_string(),
            });
        }

        form.status = SubmitStatus::Submitting;
        Ok(request)
    }

    /// Record a submission refused before reaching the service
    pub fn reject(&self, form: &mut FormState, err: SubmitError) -> Outcome {
        tracing::warn!(error = %err, "Submission refused");
        // The in-flight request still owns the status
        if err.kind() != FailureKind::InFlight {
            form.status = SubmitStatus::Failed(err.clone());
        }
        Outcome::Failure(err)
    }

    /// Perform the single network call for `request`
    pub async fn send(&self, request: CreateAssetRequest) -> Outcome {
        match self.service.create_asset(&request).await {
            Ok(response) => {
                tracing::info!(response = %response, "Asset created");
                Outcome::Success(response)
            }
            Err(err) => {
                tracing::error!(error = %err, name = %request.name, "Error creating asset");
                Outcome::Failure(err.into())
            }
        }
    }

    /// Apply a settled outcome to the form
    pub fn finish(&self, form: &mut FormState, outcome: &Outcome) {
        match outcome {
            Outcome::Success(response) => {
                form.reset();
                form.status = SubmitStatus::Succeeded(success_summary(response));
            }
            Outcome::Failure(err) if err.kind() == FailureKind::InFlight => {}
            Outcome::Failure(err) => {
                form.status = SubmitStatus::Failed(err.clone());
            }
        }
    }
}

fn success_summary(response: &CreateAssetResponse) -> String {
    match response.id() {
        Some(id) => format!("Asset created (id {id})"),
        None => "Asset created".to_string(),
    }
}
