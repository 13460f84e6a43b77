//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in milliseconds for the copy acknowledgment notice.
pub const COPY_NOTICE_TTL_MS: u64 = 1_000;
/// Time-to-live in milliseconds for info and error notices.
pub const STATUS_NOTICE_TTL_MS: u64 = 5_000;
/// Longest accepted start-time input, `"23:59"`.
pub const INPUT_MAX_LEN: usize = 5;
/// Marker appended to the input buffer where the next character lands.
pub const INPUT_CURSOR_MARKER: &str = "▏";
/// Title of the start-time input block.
pub const INPUT_TITLE: &str = "Start Time";
/// Hint rendered under the input block.
pub const INPUT_HINT: &str = "Example input: 1:00";
/// Title of the results grid block.
pub const TABLE_TITLE: &str = "Break Times";
/// Header label for the window start column.
pub const TIME_IN_HEADER: &str = "Time In";
/// Header label for the window end column.
pub const TIME_OUT_HEADER: &str = "Time Out";
/// Placeholder shown in the grid before the first calculation.
pub const TABLE_PLACEHOLDER: &str = "Enter a start time and calculate";
/// Fallback text for the status block when no notice is active.
pub const STATUS_PLACEHOLDER: &str = "No messages";
