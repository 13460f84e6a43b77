use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::view::Ui;

impl Ui {
    /// Consume keys that edit the start-time input. Returns `true` when the
    /// key was taken, whether or not it changed the buffer.
    pub(in crate::tui) fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            // ':' arrives with SHIFT set on most layouts, so only CONTROL
            // and ALT disqualify a character.
            KeyCode::Char(ch) => self.app.push_char(ch),
            KeyCode::Backspace => {
                self.app.pop_char();
                true
            }
            _ => false,
        }
    }

    /// Run the calculator on the current input. Failures surface as an
    /// error notice instead of escaping the event loop.
    pub(in crate::tui) fn run_calculation(&mut self) {
        match self.app.calculate() {
            Ok(()) => self.clear_notice(),
            Err(err) => self.error(err.to_string()),
        }
    }

    pub(in crate::tui) fn clear_input(&mut self) {
        self.app.clear_input();
    }
}
