//! Break window arithmetic for break-calc.
//!
//! Turns a shift-start time in 24-hour `HH:mm` into four rest-break windows
//! at fixed offsets. Parsing, arithmetic, and display formatting are pure;
//! presentation layers own all transient state (current input, last
//! schedule, copy acknowledgments).

pub mod error;
/// Time-of-day parsing and display formatting.
pub mod time;

use serde::Serialize;

use crate::error::Result;
use crate::time::TimeOfDay;

/// Number of break windows in a schedule.
pub const WINDOW_COUNT: usize = 4;

/// Start/end offsets in minutes from the shift start, one pair per window.
/// The fourth break is the long one.
const WINDOW_OFFSETS: [(u32, u32); WINDOW_COUNT] = [(0, 15), (16, 31), (32, 47), (48, 78)];

/// One rest period, bounded by the minutes the break starts and ends.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct BreakWindow {
    /// When the break begins.
    pub time_in: TimeOfDay,
    /// When the break ends.
    pub time_out: TimeOfDay,
}

/// The four break windows derived from one shift start, in break order.
///
/// A schedule is a value: it is never mutated in place, only replaced
/// wholesale by the next calculation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BreakSchedule {
    windows: [BreakWindow; WINDOW_COUNT],
}

impl BreakSchedule {
    /// Derive the schedule for a shift starting at `start`.
    #[must_use]
    pub fn for_start(start: TimeOfDay) -> Self {
        let windows = WINDOW_OFFSETS.map(|(time_in, time_out)| BreakWindow {
            time_in: start.offset(time_in),
            time_out: start.offset(time_out),
        });
        Self { windows }
    }

    /// The windows in break order (first break first).
    #[must_use]
    pub const fn windows(&self) -> &[BreakWindow] {
        &self.windows
    }
}

/// Compute the break schedule for a shift starting at `start_time`.
///
/// Equal inputs yield equal schedules; there is no hidden state.
///
/// # Errors
///
/// Returns [`error::Error::InvalidFormat`] carrying the offending string
/// when `start_time` is not valid 24-hour `HH:mm`.
pub fn calculate(start_time: &str) -> Result<BreakSchedule> {
    let start: TimeOfDay = start_time.parse()?;
    Ok(BreakSchedule::for_start(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn displayed(schedule: &BreakSchedule) -> Vec<(String, String)> {
        schedule
            .windows()
            .iter()
            .map(|window| (window.time_in.to_string(), window.time_out.to_string()))
            .collect()
    }

    #[test]
    fn one_oclock_start_matches_reference_windows() {
        let schedule =
            calculate("1:00").unwrap_or_else(|err| panic!("1:00 must calculate: {err}"));

        let minutes: Vec<(u32, u32)> = schedule
            .windows()
            .iter()
            .map(|window| (window.time_in.minutes(), window.time_out.minutes()))
            .collect();
        assert_eq!(minutes, vec![(60, 75), (76, 91), (92, 107), (108, 138)]);

        assert_eq!(
            displayed(&schedule),
            vec![
                ("1:00".to_owned(), "1:15".to_owned()),
                ("1:16".to_owned(), "1:31".to_owned()),
                ("1:32".to_owned(), "1:47".to_owned()),
                ("1:48".to_owned(), "2:18".to_owned()),
            ]
        );
    }

    #[test]
    fn afternoon_start_renders_in_12_hour_form() {
        let schedule =
            calculate("13:00").unwrap_or_else(|err| panic!("13:00 must calculate: {err}"));
        let first = schedule.windows()[0];
        assert_eq!(first.time_in.minutes(), 780);
        assert_eq!(first.time_out.minutes(), 795);
        assert_eq!(first.time_in.to_string(), "1:00");
        assert_eq!(first.time_out.to_string(), "1:15");
    }

    #[test]
    fn midnight_start_keeps_hour_zero() {
        let schedule =
            calculate("00:00").unwrap_or_else(|err| panic!("00:00 must calculate: {err}"));
        let first = schedule.windows()[0];
        assert_eq!(first.time_in.to_string(), "0:00");
        assert_eq!(first.time_out.to_string(), "0:15");
    }

    #[test]
    fn late_start_crosses_midnight_without_normalizing() {
        let schedule =
            calculate("23:59").unwrap_or_else(|err| panic!("23:59 must calculate: {err}"));
        let last = schedule.windows()[WINDOW_COUNT - 1];
        // 1439 + 78 = 1517 minutes = 25 h 17 min, reduced once to 13:17.
        assert_eq!(last.time_out.minutes(), 1517);
        assert_eq!(last.time_out.to_string(), "13:17");
    }

    #[test]
    fn window_lengths_follow_the_fixed_offsets() {
        let schedule =
            calculate("9:30").unwrap_or_else(|err| panic!("9:30 must calculate: {err}"));
        let lengths: Vec<u32> = schedule
            .windows()
            .iter()
            .map(|window| window.time_out.minutes() - window.time_in.minutes())
            .collect();
        assert_eq!(lengths, vec![15, 15, 15, 30]);
    }

    #[test]
    fn invalid_inputs_fail_without_a_schedule() {
        for input in ["25:00", "1:60", "abc"] {
            let Err(err) = calculate(input) else {
                panic!("{input} must not produce a schedule");
            };
            assert_eq!(err, Error::InvalidFormat(input.to_owned()));
        }
    }

    #[test]
    fn equal_inputs_yield_equal_schedules() {
        let first = calculate("7:45").unwrap_or_else(|err| panic!("7:45 must calculate: {err}"));
        let second = calculate("7:45").unwrap_or_else(|err| panic!("7:45 must calculate: {err}"));
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_windows_as_display_strings() {
        let schedule =
            calculate("1:00").unwrap_or_else(|err| panic!("1:00 must calculate: {err}"));
        let json = serde_json::to_value(&schedule)
            .unwrap_or_else(|err| panic!("schedule must serialize: {err}"));
        assert_eq!(
            json,
            serde_json::json!([
                {"time_in": "1:00", "time_out": "1:15"},
                {"time_in": "1:16", "time_out": "1:31"},
                {"time_in": "1:32", "time_out": "1:47"},
                {"time_in": "1:48", "time_out": "2:18"},
            ])
        );
    }
}
