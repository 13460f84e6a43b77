use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::constants::STATUS_PLACEHOLDER;
use super::super::notice::Notice;
use super::super::view::Ui;
use super::util::truncate_with_ellipsis;

impl Ui {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::status_layout_constraints())
            .split(area);

        let instructions = Paragraph::new(self.instructions())
            .block(Block::default().title("Keys").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, rows[0]);

        let max_width = usize::from(rows[1].width.saturating_sub(2));
        let message = Paragraph::new(self.status_text(max_width).into_owned())
            .block(Block::default().title("Status").borders(Borders::ALL))
            .style(self.status_style());
        f.render_widget(message, rows[1]);
    }

    pub(in crate::tui) const fn status_layout_constraints() -> [Constraint; 2] {
        [
            Constraint::Length(Self::INSTRUCTIONS_HEIGHT),
            Constraint::Min(Self::STATUS_MESSAGE_MIN_HEIGHT),
        ]
    }

    pub(in crate::tui) fn instructions(&self) -> String {
        format!("digits+colon:type {}", self.keybindings.help_text())
    }

    fn status_text(&self, max_width: usize) -> Cow<'_, str> {
        self.notice
            .as_ref()
            .map_or(Cow::Borrowed(STATUS_PLACEHOLDER), |notice| {
                truncate_with_ellipsis(&notice.text, max_width)
            })
    }

    fn status_style(&self) -> Style {
        self.notice.as_ref().map_or_else(Style::default, Notice::style)
    }
}
