//! Application state and core logic

use crate::controller::{FailureKind, Outcome, SubmitController};
use crate::service::{AssetService, CreateAssetRequest};
use crate::state::{AppState, CreatedAsset, Form, SubmitStatus, CLEAR_BUTTON, CREATE_BUTTON};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// A submission the service has answered
#[derive(Debug)]
pub struct Settled {
    pub request: CreateAssetRequest,
    pub outcome: Outcome,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submits the form to the asset service
    controller: SubmitController,
    /// Whether the app should quit
    quit: bool,
    settled_tx: mpsc::UnboundedSender<Settled>,
    settled_rx: mpsc::UnboundedReceiver<Settled>,
}

impl App {
    /// Create a new App instance
    pub fn new(service: Arc<dyn AssetService>, service_url: impl Into<String>) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(service_url),
            controller: SubmitController::new(service),
            quit: false,
            settled_tx,
            settled_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let submit_combo = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER);
        // Shortcut chords never type into a field; Shift still does
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        let on_action_panel = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if submit_combo => self.submit(),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => {
                if self.state.form.is_pristine() && !self.state.form.is_submitting() {
                    self.quit = true;
                }
            }
            // Action panel navigation
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') if on_action_panel => {
                self.state.form.prev_button()
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') if on_action_panel => {
                self.state.form.next_button()
            }
            KeyCode::Enter if on_action_panel => match self.state.form.selected_button {
                CREATE_BUTTON => self.submit(),
                CLEAR_BUTTON => self.clear_form(),
                _ => {}
            },
            // Enter on a field moves down
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !on_action_panel && !chorded => self.state.form.push_char(c),
            KeyCode::Backspace if !on_action_panel => self.state.form.pop_char(),
            _ => {}
        }
    }

    /// Start a submission of the current form on a background task
    pub fn submit(&mut self) {
        match self.controller.begin(&mut self.state.form) {
            Ok(request) => {
                let controller = self.controller.clone();
                let tx = self.settled_tx.clone();
                tokio::spawn(async move {
                    let outcome = controller.send(request.clone()).await;
                    // The receiver lives as long as the app
                    let _ = tx.send(Settled { request, outcome });
                });
            }
            Err(err) => {
                let kind = err.kind();
                let message = format!("Cannot create asset: {err}");
                self.controller.reject(&mut self.state.form, err);
                if kind != FailureKind::InFlight {
                    self.push_error(message);
                }
            }
        }
    }

    /// Reset the form fields without submitting
    fn clear_form(&mut self) {
        self.state.form.reset();
        if !self.state.form.is_submitting() {
            self.state.form.status = SubmitStatus::Idle;
        }
    }

    /// Apply every submission that has settled since the last call
    pub fn poll_settled(&mut self) {
        while let Ok(settled) = self.settled_rx.try_recv() {
            self.apply_settled(settled);
        }
    }

    /// Wait for the next submission to settle and apply it
    #[cfg(test)]
    async fn next_settled(&mut self) {
        if let Some(settled) = self.settled_rx.recv().await {
            self.apply_settled(settled);
        }
    }

    fn apply_settled(&mut self, settled: Settled) {
        let Settled { request, outcome } = settled;
        self.controller.finish(&mut self.state.form, &outcome);
        match outcome {
            Outcome::Success(response) => {
                self.state
                    .record_created(CreatedAsset::new(&request, &response));
            }
            Outcome::Failure(err) => {
                self.push_error(format!("Failed to create asset: {err}"));
            }
        }
    }
}
