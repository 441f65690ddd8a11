//! Form field value objects

/// Raw text shown in a price field before the user has typed anything
const INITIAL_PRICE_TEXT: &str = "0";

/// Parse price input with standard decimal rules.
///
/// Unparseable input yields `NaN` instead of an error; the submit step is
/// where a non-numeric price gets rejected. Infinities (`"inf"`, or overflow
/// such as `"1e400"`) count as unparseable since JSON cannot carry them.
pub fn parse_price(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// The text as typed plus its parsed value
    Price { raw: String, value: f64 },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new price field holding zero
    pub fn price(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Price {
                raw: INITIAL_PRICE_TEXT.to_string(),
                value: 0.0,
            },
        }
    }

    /// Get the text as typed (raw input for price fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Price { raw, .. } => raw,
        }
    }

    /// Get the parsed price (returns 0 for text fields)
    pub fn as_price(&self) -> f64 {
        match &self.value {
            FieldValue::Price { value, .. } => *value,
            FieldValue::Text(_) => 0.0,
        }
    }

    /// Replace the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Replace the price from user input, parsing it on the way in
    pub fn set_price(&mut self, input: &str) {
        self.value = FieldValue::Price {
            raw: input.to_string(),
            value: parse_price(input),
        };
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &self.value {
            FieldValue::Text(s) => {
                let mut s = s.clone();
                s.push(c);
                self.set_text(s);
            }
            FieldValue::Price { raw, .. } => {
                // A digit typed over the untouched zero replaces it
                let next = if raw == INITIAL_PRICE_TEXT && c.is_ascii_digit() {
                    c.to_string()
                } else {
                    format!("{raw}{c}")
                };
                self.set_price(&next);
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &self.value {
            FieldValue::Text(s) => {
                let mut s = s.clone();
                s.pop();
                self.set_text(s);
            }
            FieldValue::Price { raw, .. } => {
                let mut raw = raw.clone();
                raw.pop();
                self.set_price(&raw);
            }
        }
    }

    /// Restore the field's initial value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Price { raw, value } => {
                *raw = INITIAL_PRICE_TEXT.to_string();
                *value = 0.0;
            }
        }
    }

    /// Whether the field still holds its initial value
    pub fn is_initial(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Price { raw, value } => raw == INITIAL_PRICE_TEXT && *value == 0.0,
        }
    }

    /// Whether a price field holds input that did not parse
    pub fn is_invalid(&self) -> bool {
        matches!(self.value, FieldValue::Price { value, .. } if value.is_nan())
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Price { raw, value } if value.is_nan() => format!("{raw}  (not a number)"),
            FieldValue::Price { raw, .. } => raw.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_price_decimal() {
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price("100"), 100.0);
        assert_eq!(parse_price(" 42 "), 42.0);
        assert_eq!(parse_price("-3"), -3.0);
    }

    #[test]
    fn test_parse_price_failure_is_nan() {
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("").is_nan());
        assert!(parse_price("12,5").is_nan());
        assert!(parse_price("inf").is_nan());
        assert!(parse_price("-infinity").is_nan());
        assert!(parse_price("1e400").is_nan());
    }

    #[test]
    fn test_overflowing_price_is_flagged_invalid() {
        let mut field = FormField::price("price", "Price");
        field.set_price("1e400");
        assert!(field.is_invalid());
        assert!(field.display_value().contains("not a number"));
    }

    #[test]
    fn test_new_price_field_is_zero() {
        let field = FormField::price("price", "Price");
        assert_eq!(field.as_text(), "0");
        assert_eq!(field.as_price(), 0.0);
        assert!(field.is_initial());
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_typing_digit_replaces_initial_zero() {
        let mut field = FormField::price("price", "Price");
        field.push_char('1');
        field.push_char('0');
        field.push_char('0');
        assert_eq!(field.as_text(), "100");
        assert_eq!(field.as_price(), 100.0);
    }

    #[test]
    fn test_typing_decimal_point_keeps_leading_zero() {
        let mut field = FormField::price("price", "Price");
        field.push_char('.');
        field.push_char('5');
        assert_eq!(field.as_text(), "0.5");
        assert_eq!(field.as_price(), 0.5);
    }

    #[test]
    fn test_typing_letters_makes_price_nan() {
        let mut field = FormField::price("price", "Price");
        field.set_price("");
        for c in "abc".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "abc");
        assert!(field.as_price().is_nan());
        assert!(field.is_invalid());
        assert!(field.display_value().contains("not a number"));
    }

    #[test]
    fn test_backspace_reparses_price() {
        let mut field = FormField::price("price", "Price");
        field.set_price("12x");
        assert!(field.is_invalid());
        field.pop_char();
        assert_eq!(field.as_price(), 12.0);
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
        assert!(field.as_price().is_nan());
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = FormField::text("name", "Asset Name");
        field.push_char('G');
        field.push_char('o');
        assert_eq!(field.as_text(), "Go");
        field.pop_char();
        assert_eq!(field.as_text(), "G");
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear_restores_initial_values() {
        let mut name = FormField::text("name", "Asset Name");
        name.set_text("Gold".to_string());
        name.clear();
        assert!(name.is_initial());

        let mut price = FormField::price("price", "Price");
        price.set_price("abc");
        price.clear();
        assert!(price.is_initial());
        assert_eq!(price.as_price(), 0.0);
    }

    #[test]
    fn test_as_price_on_text_field_is_zero() {
        let field = FormField::text("name", "Asset Name");
        assert_eq!(field.as_price(), 0.0);
    }
}
