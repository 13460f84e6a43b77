use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::super::constants::{INPUT_CURSOR_MARKER, INPUT_HINT, INPUT_TITLE};
use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn draw_input(&self, f: &mut Frame<'_>, area: Rect) {
        let input = Paragraph::new(self.input_text())
            .block(Block::default().title(INPUT_TITLE).borders(Borders::ALL));
        f.render_widget(input, area);
    }

    pub(in crate::tui) fn draw_hint(&self, f: &mut Frame<'_>, area: Rect) {
        let hint = Paragraph::new(INPUT_HINT).style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, area);
    }

    // The terminal cursor stays hidden, so mark the insert position inline.
    fn input_text(&self) -> String {
        format!("{}{INPUT_CURSOR_MARKER}", self.app.input())
    }
}
