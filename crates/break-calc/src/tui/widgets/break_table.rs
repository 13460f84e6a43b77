use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::super::app::{CellCursor, Column};
use super::super::constants::{TABLE_PLACEHOLDER, TABLE_TITLE, TIME_IN_HEADER, TIME_OUT_HEADER};
use super::super::view::{CellHitBox, Ui};

impl Ui {
    pub(in crate::tui) fn draw_break_table(&mut self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title(TABLE_TITLE).borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(schedule) = self.app.schedule().cloned() else {
            self.cell_areas.clear();
            let placeholder =
                Paragraph::new(TABLE_PLACEHOLDER).style(Style::default().fg(Color::DarkGray));
            f.render_widget(placeholder, inner);
            return;
        };

        let mut hits = Vec::with_capacity(schedule.windows().len() * 2);

        if let Some(header) = grid_row(inner, 0) {
            let (left, right) = split_columns(header);
            let style = Style::default().add_modifier(Modifier::BOLD);
            f.render_widget(Paragraph::new(TIME_IN_HEADER).style(style), left);
            f.render_widget(Paragraph::new(TIME_OUT_HEADER).style(style), right);
        }

        for (row, window) in schedule.windows().iter().enumerate() {
            let Ok(offset) = u16::try_from(row + 1) else {
                break;
            };
            let Some(grid) = grid_row(inner, offset) else {
                break;
            };
            let (left, right) = split_columns(grid);

            self.render_cell(f, left, row, Column::TimeIn, window.time_in.to_string());
            self.render_cell(f, right, row, Column::TimeOut, window.time_out.to_string());

            hits.push(CellHitBox {
                area: left,
                row,
                column: Column::TimeIn,
            });
            hits.push(CellHitBox {
                area: right,
                row,
                column: Column::TimeOut,
            });
        }

        self.cell_areas = hits;
    }

    fn render_cell(&self, f: &mut Frame<'_>, area: Rect, row: usize, column: Column, text: String) {
        let style = if self.app.cursor() == (CellCursor { row, column }) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(text).style(style), area);
    }
}

/// One-line slice of the grid interior, `None` when the terminal is too
/// short to show it.
fn grid_row(inner: Rect, index: u16) -> Option<Rect> {
    if index >= inner.height || inner.width == 0 {
        return None;
    }

    Some(Rect {
        x: inner.x,
        y: inner.y + index,
        width: inner.width,
        height: 1,
    })
}

fn split_columns(row: Rect) -> (Rect, Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(row);
    (halves[0], halves[1])
}
