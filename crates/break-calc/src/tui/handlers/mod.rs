use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;

use super::view::Ui;

pub(super) mod input;
pub(super) mod table;

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Edit keys always win over configurable actions.
        if self.handle_edit_key(key) {
            return;
        }

        if self.keybindings.matches(Action::Quit, &key) {
            self.should_quit = true;
            return;
        }

        if self.keybindings.matches(Action::Calculate, &key) {
            self.run_calculation();
            return;
        }

        if self.keybindings.matches(Action::Clear, &key) {
            self.clear_input();
            return;
        }

        if self.keybindings.matches(Action::Copy, &key) {
            self.copy_selected();
            return;
        }

        if self.keybindings.matches(Action::Up, &key) {
            self.app.move_up();
            return;
        }

        if self.keybindings.matches(Action::Down, &key) {
            self.app.move_down();
            return;
        }

        if self.keybindings.matches(Action::Left, &key) {
            self.app.move_left();
            return;
        }

        if self.keybindings.matches(Action::Right, &key) {
            self.app.move_right();
        }
    }

    pub(in crate::tui) fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        self.copy_cell_at(mouse.column, mouse.row);
    }
}
