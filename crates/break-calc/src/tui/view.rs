use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::config::KeyBindingsConfig;

use super::app::{App, Column};
use super::clipboard::{ClipboardSink, default_clipboard};
use super::notice::{Clock, Notice, SystemClock};

/// Screen region of one grid cell, captured at draw time so mouse clicks
/// can be resolved against the most recent frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct CellHitBox {
    pub(super) area: Rect,
    pub(super) row: usize,
    pub(super) column: Column,
}

pub(super) struct Ui {
    pub(super) app: App,
    pub(super) notice: Option<Notice>,
    pub(super) should_quit: bool,
    pub(super) keybindings: KeyBindingsConfig,
    pub(super) clipboard: Box<dyn ClipboardSink>,
    pub(super) clock: Box<dyn Clock>,
    /// Cell regions from the most recent draw. Empty before the first
    /// calculation.
    pub(super) cell_areas: Vec<CellHitBox>,
}

impl Ui {
    pub(super) const INPUT_HEIGHT: u16 = 3;
    pub(super) const HINT_HEIGHT: u16 = 1;
    pub(super) const TABLE_MIN_HEIGHT: u16 = 7;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_MIN_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_MIN_HEIGHT: u16 =
        Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_MIN_HEIGHT;

    pub(super) fn new(keybindings: KeyBindingsConfig) -> Self {
        Self::with_parts(keybindings, default_clipboard(), Box::new(SystemClock))
    }

    pub(super) fn with_parts(
        keybindings: KeyBindingsConfig,
        clipboard: Box<dyn ClipboardSink>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            app: App::new(),
            notice: None,
            should_quit: false,
            keybindings,
            clipboard,
            clock,
            cell_areas: Vec::new(),
        }
    }

    pub(super) fn draw(&mut self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Length(Self::HINT_HEIGHT),
                Constraint::Min(Self::TABLE_MIN_HEIGHT),
                Constraint::Length(Self::STATUS_FOOTER_MIN_HEIGHT),
            ])
            .split(f.area());

        self.draw_input(f, chunks[0]);
        self.draw_hint(f, chunks[1]);
        self.draw_break_table(f, chunks[2]);
        self.draw_status(f, chunks[3]);
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::info(message, self.clock.now()));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::error(message, self.clock.now()));
    }

    pub(super) fn copied(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::copied(message, self.clock.now()));
    }

    pub(super) fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub(super) fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(notice) = &self.notice
            && notice.is_expired(now)
        {
            self.notice = None;
        }
    }
}
