use ratatui::layout::Position;

use super::super::view::Ui;

impl Ui {
    /// Copy the selected cell's display text to the clipboard.
    pub(in crate::tui) fn copy_selected(&mut self) {
        let Some(text) = self.app.selected_text() else {
            self.error("nothing to copy yet");
            return;
        };

        self.copy_text(&text);
    }

    /// Resolve a click at screen coordinates against the last drawn frame;
    /// a hit selects the cell and copies it.
    pub(in crate::tui) fn copy_cell_at(&mut self, x: u16, y: u16) {
        let Some(hit) = self
            .cell_areas
            .iter()
            .find(|cell| cell.area.contains(Position { x, y }))
            .copied()
        else {
            return;
        };

        if self.app.select(hit.row, hit.column) {
            self.copy_selected();
        }
    }

    fn copy_text(&mut self, text: &str) {
        match self.clipboard.set_text(text) {
            Ok(()) => self.copied(format!("Copied {text}")),
            Err(err) => self.error(format!("copy failed: {err:#}")),
        }
    }
}
