//! # UI State Module
//!
//! User feedback that is not part of the journal data itself.
//!
//! ## Responsibilities:
//! - Blocking acknowledgement shown after an entry is saved
//! - Inline hint for a required field left blank

use shared::RequiredField;

/// Hint shown under the form when a required field is blank
pub const REQUIRED_FIELD_HINT: &str = "Please fill out this field";

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Acknowledgement message; while set, the rest of the UI is inert
    pub acknowledgement: Option<String>,

    /// Set once the acknowledgement has been on screen for a frame. Enter only
    /// dismisses after that, so the key press that saved the entry can't close it.
    acknowledgement_drawn: bool,

    /// Required-field hint for the journal form
    pub validation_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_acknowledgement(&mut self, message: &str) {
        self.acknowledgement = Some(message.to_string());
        self.acknowledgement_drawn = false;
    }

    pub fn dismiss_acknowledgement(&mut self) {
        self.acknowledgement = None;
        self.acknowledgement_drawn = false;
    }

    pub fn mark_acknowledgement_drawn(&mut self) {
        if self.acknowledgement.is_some() {
            self.acknowledgement_drawn = true;
        }
    }

    /// Whether Enter may dismiss the acknowledgement this frame
    pub fn accepts_keyboard_dismiss(&self) -> bool {
        self.acknowledgement.is_some() && self.acknowledgement_drawn
    }

    pub fn is_acknowledgement_open(&self) -> bool {
        self.acknowledgement.is_some()
    }

    /// Point the caregiver at the first blank required field
    pub fn set_missing_field(&mut self, field: RequiredField) {
        self.validation_message = Some(format!("{}: {}", field.label(), REQUIRED_FIELD_HINT));
    }

    pub fn clear_validation(&mut self) {
        self.validation_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_dismiss_waits_for_first_draw() {
        let mut ui = UIState::new();
        ui.mark_acknowledgement_drawn();
        assert!(!ui.accepts_keyboard_dismiss());

        ui.show_acknowledgement("Saved");
        assert!(ui.is_acknowledgement_open());
        assert!(!ui.accepts_keyboard_dismiss());

        ui.mark_acknowledgement_drawn();
        assert!(ui.accepts_keyboard_dismiss());

        // A fresh acknowledgement starts unarmed again
        ui.show_acknowledgement("Saved again");
        assert!(!ui.accepts_keyboard_dismiss());

        ui.dismiss_acknowledgement();
        assert!(!ui.is_acknowledgement_open());
        assert!(!ui.accepts_keyboard_dismiss());
    }

    #[test]
    fn test_missing_field_hint() {
        let mut ui = UIState::new();
        ui.set_missing_field(RequiredField::Consent);
        assert_eq!(
            ui.validation_message.as_deref(),
            Some("Consent: Please fill out this field")
        );
        ui.clear_validation();
        assert!(ui.validation_message.is_none());
    }
}
