//! Create-asset form state

use super::field::FormField;
use crate::controller::SubmitError;
use crate::service::CreateAssetRequest;

/// Index of the name field
pub const NAME_FIELD: usize = 0;
/// Index of the price field
pub const PRICE_FIELD: usize = 1;
/// Index of the action buttons row
pub const ACTIONS_ROW: usize = 2;

/// Button order on the action panel
pub const CREATE_BUTTON: usize = 0;
pub const CLEAR_BUTTON: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where the form is in its submit cycle, shown to the user
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A request is on the wire
    Submitting,
    /// Last submission succeeded; holds a short summary
    Succeeded(String),
    /// Last submission failed
    Failed(SubmitError),
}

/// The two editable fields of the create-asset form plus focus and status
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: FormField,
    pub price: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Create, 1=Clear)
    pub selected_button: usize,
    pub status: SubmitStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Asset Name"),
            price: FormField::price("price", "Price"),
            active_field_index: NAME_FIELD,
            selected_button: CREATE_BUTTON,
            status: SubmitStatus::Idle,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_text()
    }

    /// Parsed price; `NaN` when the input did not parse
    pub fn price(&self) -> f64 {
        self.price.as_price()
    }

    /// Price as the user typed it
    pub fn price_text(&self) -> &str {
        self.price.as_text()
    }

    /// Replace the name unconditionally
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name.set_text(value.into());
    }

    /// Replace the price from text; unparseable input stores `NaN`
    pub fn set_price(&mut self, input: &str) {
        self.price.set_price(input);
    }

    /// Build the request payload from the current values
    pub fn snapshot(&self) -> CreateAssetRequest {
        CreateAssetRequest {
            name: self.name().to_string(),
            price: self.price(),
        }
    }

    /// Restore initial field values and move focus back to the name field.
    /// The submit status is left alone.
    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
        self.active_field_index = NAME_FIELD;
        self.selected_button = CREATE_BUTTON;
    }

    /// True when both fields hold their initial values
    pub fn is_pristine(&self) -> bool {
        self.name.is_initial() && self.price.is_initial()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == ACTIONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the focused field
    pub fn push_char(&mut self, c: char) {
        match self.active_field_index {
            NAME_FIELD => self.name.push_char(c),
            PRICE_FIELD => self.price.push_char(c),
            _ => {}
        }
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) {
        match self.active_field_index {
            NAME_FIELD => self.name.pop_char(),
            PRICE_FIELD => self.price.pop_char(),
            _ => {}
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        3 // name, price, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ACTIONS_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = FormState::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.price(), 0.0);
        assert_eq!(form.active_field_index, NAME_FIELD);
        assert_eq!(form.selected_button, CREATE_BUTTON);
        assert_eq!(form.status, SubmitStatus::Idle);
        assert!(form.is_pristine());
    }

    #[test]
    fn test_default_equals_new() {
        assert_eq!(FormState::default(), FormState::new());
    }

    #[test]
    fn test_set_price_parses_decimal() {
        let mut form = FormState::new();
        form.set_price("12.5");
        assert_eq!(form.price(), 12.5);
        assert_eq!(form.price_text(), "12.5");
    }

    #[test]
    fn test_set_price_unparseable_stores_nan() {
        let mut form = FormState::new();
        form.set_price("abc");
        assert!(form.price().is_nan());
        assert_eq!(form.price_text(), "abc");
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut form = FormState::new();
        form.set_name("");
        form.set_price("-250");
        assert_eq!(form.name(), "");
        assert_eq!(form.price(), -250.0);
    }

    #[test]
    fn test_snapshot_matches_fields() {
        let mut form = FormState::new();
        form.set_name("Gold Bar");
        form.set_price("100");
        assert_eq!(
            form.snapshot(),
            CreateAssetRequest {
                name: "Gold Bar".to_string(),
                price: 100.0
            }
        );
    }

    #[test]
    fn test_snapshot_is_detached_from_later_edits() {
        let mut form = FormState::new();
        form.set_name("Gold Bar");
        let request = form.snapshot();
        form.set_name("Silver Bar");
        assert_eq!(request.name, "Gold Bar");
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut form = FormState::new();
        form.set_name("Gold Bar");
        form.set_price("abc");
        form.active_field_index = ACTIONS_ROW;
        form.selected_button = CLEAR_BUTTON;

        form.reset();

        assert_eq!(form.name(), "");
        assert_eq!(form.price(), 0.0);
        assert_eq!(form.active_field_index, NAME_FIELD);
        assert_eq!(form.selected_button, CREATE_BUTTON);
        assert!(form.is_pristine());
    }

    #[test]
    fn test_reset_keeps_status() {
        let mut form = FormState::new();
        form.status = SubmitStatus::Succeeded("created".to_string());
        form.reset();
        assert_eq!(form.status, SubmitStatus::Succeeded("created".to_string()));
    }

    #[test]
    fn test_typing_routes_to_focused_field() {
        let mut form = FormState::new();
        for c in "Gold".chars() {
            form.push_char(c);
        }
        form.next_field();
        for c in "99".chars() {
            form.push_char(c);
        }
        form.next_field();
        form.push_char('x'); // buttons row ignores typing

        assert_eq!(form.name(), "Gold");
        assert_eq!(form.price(), 99.0);
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_pop_char_on_focused_field() {
        let mut form = FormState::new();
        form.set_name("Gold");
        form.pop_char();
        assert_eq!(form.name(), "Gol");
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = FormState::new();
        for _ in 0..3 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, NAME_FIELD);
    }

    #[test]
    fn test_prev_field_cycles() {
        let mut form = FormState::new();
        form.prev_field();
        assert_eq!(form.active_field_index, ACTIONS_ROW);
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = FormState::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, ACTIONS_ROW);
    }

    #[test]
    fn test_buttons_wrap() {
        let mut form = FormState::new();
        form.next_button();
        assert_eq!(form.selected_button, CLEAR_BUTTON);
        form.next_button();
        assert_eq!(form.selected_button, CREATE_BUTTON);
        form.prev_button();
        assert_eq!(form.selected_button, CLEAR_BUTTON);
    }

    #[test]
    fn test_field_names() {
        let form = FormState::new();
        assert_eq!(form.name.name, "name");
        assert_eq!(form.price.name, "price");
    }

    #[test]
    fn test_is_submitting() {
        let mut form = FormState::new();
        assert!(!form.is_submitting());
        form.status = SubmitStatus::Submitting;
        assert!(form.is_submitting());
    }
}
