//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
///
/// Ctrl+S is accepted on every platform as well.
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// - macOS: "Cmd+S"
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_label_names_submit_modifier() {
        let prefix = if SUBMIT_MODIFIER == KeyModifiers::SUPER {
            "Cmd+"
        } else {
            "Ctrl+"
        };
        assert!(SUBMIT_SHORTCUT.starts_with(prefix));
        assert!(SUBMIT_SHORTCUT.ends_with('S'));
    }
}
