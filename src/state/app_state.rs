//! Application state

use super::forms::FormState;
use crate::service::{CreateAssetRequest, CreateAssetResponse};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// An asset created during this session
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedAsset {
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Local>,
}

impl CreatedAsset {
    pub fn new(request: &CreateAssetRequest, response: &CreateAssetResponse) -> Self {
        Self {
            id: response.id(),
            name: request.name.clone(),
            price: request.price,
            created_at: Local::now(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The create-asset form
    pub form: FormState,
    /// Assets created this session, newest first
    pub created: Vec<CreatedAsset>,
    /// Where creation requests are sent, shown in the status bar
    pub service_url: String,
    /// Error messages waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Default::default()
        }
    }

    /// Record a successful creation
    pub fn record_created(&mut self, asset: CreatedAsset) {
        self.created.insert(0, asset);
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
