//! Form domain layer
//!
//! Framework-independent state for the create-asset form.

mod field;
mod form_state;

pub use field::FormField;
#[cfg(test)]
pub use field::FieldValue;
pub use form_state::{
    Form, FormState, SubmitStatus, ACTIONS_ROW, CLEAR_BUTTON, CREATE_BUTTON, NAME_FIELD,
    PRICE_FIELD,
};
