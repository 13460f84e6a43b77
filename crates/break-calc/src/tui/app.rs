use break_calc_core::BreakSchedule;
use break_calc_core::WINDOW_COUNT;
use break_calc_core::error::Error;

use super::constants::INPUT_MAX_LEN;

/// Column of the results grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum Column {
    /// The minute a break starts.
    #[default]
    TimeIn,
    /// The minute a break ends.
    TimeOut,
}

/// Position of the selected cell in the results grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct CellCursor {
    pub(super) row: usize,
    pub(super) column: Column,
}

/// Calculator state: the input buffer, the last computed schedule, and the
/// cell cursor. Owns no terminal or clipboard resources, so it can be unit
/// tested on its own.
pub(super) struct App {
    input: String,
    schedule: Option<BreakSchedule>,
    cursor: CellCursor,
}

impl App {
    pub(super) const fn new() -> Self {
        Self {
            input: String::new(),
            schedule: None,
            cursor: CellCursor {
                row: 0,
                column: Column::TimeIn,
            },
        }
    }

    pub(super) fn input(&self) -> &str {
        &self.input
    }

    /// Append `ch` if it can occur in an `HH:mm` string and the buffer has
    /// room. Returns whether the character was accepted.
    pub(super) fn push_char(&mut self, ch: char) -> bool {
        let accepted = (ch.is_ascii_digit() || ch == ':') && self.input.len() < INPUT_MAX_LEN;
        if accepted {
            self.input.push(ch);
        }
        accepted
    }

    pub(super) fn pop_char(&mut self) {
        self.input.pop();
    }

    pub(super) fn clear_input(&mut self) {
        self.input.clear();
    }

    pub(super) const fn schedule(&self) -> Option<&BreakSchedule> {
        self.schedule.as_ref()
    }

    pub(super) const fn cursor(&self) -> CellCursor {
        self.cursor
    }

    /// Run the calculator on the current buffer. On success the previous
    /// schedule is replaced wholesale and the cursor returns to the first
    /// cell; on failure the previous schedule stays visible.
    pub(super) fn calculate(&mut self) -> Result<(), Error> {
        let schedule = break_calc_core::calculate(&self.input)?;
        self.schedule = Some(schedule);
        self.cursor = CellCursor::default();
        Ok(())
    }

    pub(super) fn move_up(&mut self) {
        if self.schedule.is_some() {
            self.cursor.row = self.cursor.row.saturating_sub(1);
        }
    }

    pub(super) fn move_down(&mut self) {
        if self.schedule.is_some() && self.cursor.row + 1 < WINDOW_COUNT {
            self.cursor.row += 1;
        }
    }

    pub(super) fn move_left(&mut self) {
        if self.schedule.is_some() {
            self.cursor.column = Column::TimeIn;
        }
    }

    pub(super) fn move_right(&mut self) {
        if self.schedule.is_some() {
            self.cursor.column = Column::TimeOut;
        }
    }

    /// Point the cursor at (`row`, `column`). Returns `false` when no
    /// schedule exists yet or the row is out of range.
    pub(super) fn select(&mut self, row: usize, column: Column) -> bool {
        if self.schedule.is_none() || row >= WINDOW_COUNT {
            return false;
        }
        self.cursor = CellCursor { row, column };
        true
    }

    pub(super) fn cell_text(&self, row: usize, column: Column) -> Option<String> {
        let window = self.schedule.as_ref()?.windows().get(row)?;
        let time = match column {
            Column::TimeIn => window.time_in,
            Column::TimeOut => window.time_out,
        };
        Some(time.to_string())
    }

    pub(super) fn selected_text(&self) -> Option<String> {
        self.cell_text(self.cursor.row, self.cursor.column)
    }
}
