//! Transient status notices and the clock they expire against.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};

use super::constants::{COPY_NOTICE_TTL_MS, STATUS_NOTICE_TTL_MS};

/// Source of the current instant. Injected into the UI so expiry can be
/// tested without real waits.
pub(super) trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Severity of a notice. Each level carries its own time-to-live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NoticeLevel {
    /// Neutral feedback.
    Info,
    /// Copy acknowledgment, short-lived by design of the copy flow.
    Copied,
    /// Something went wrong.
    Error,
}

impl NoticeLevel {
    const fn ttl(self) -> Duration {
        match self {
            Self::Copied => Duration::from_millis(COPY_NOTICE_TTL_MS),
            Self::Info | Self::Error => Duration::from_millis(STATUS_NOTICE_TTL_MS),
        }
    }
}

/// A transient status line. Raising a new notice replaces the previous one
/// wholesale, so the most recently raised notice always wins and its expiry
/// window restarts from its own `raised_at`.
#[derive(Debug)]
pub(super) struct Notice {
    pub(super) text: String,
    pub(super) level: NoticeLevel,
    raised_at: Instant,
}

impl Notice {
    pub(super) fn info(text: impl Into<String>, now: Instant) -> Self {
        Self::new(text, NoticeLevel::Info, now)
    }

    pub(super) fn error(text: impl Into<String>, now: Instant) -> Self {
        Self::new(text, NoticeLevel::Error, now)
    }

    pub(super) fn copied(text: impl Into<String>, now: Instant) -> Self {
        Self::new(text, NoticeLevel::Copied, now)
    }

    fn new(text: impl Into<String>, level: NoticeLevel, now: Instant) -> Self {
        Self {
            text: text.into(),
            level,
            raised_at: now,
        }
    }

    /// Whether the notice has outlived its TTL at `now`. Asking twice with
    /// the same instant gives the same answer.
    pub(super) fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= self.level.ttl()
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            NoticeLevel::Info => Style::default().fg(Color::Green),
            NoticeLevel::Copied => Style::default().fg(Color::Cyan),
            NoticeLevel::Error => Style::default().fg(Color::Red),
        }
    }
}
