use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Valid 24-hour `HH:mm` input: hours 0-23 (leading zero optional), minutes
/// 00-59.
static TIME_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$")
        .unwrap_or_else(|err| panic!("time pattern must compile: {err}"))
});

/// A moment of the day counted in minutes since 00:00.
///
/// Parsing yields values in `[0, 1439]`; [`offset`](Self::offset) may push
/// the count past one day and the result is deliberately left unnormalized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Wrap a raw minutes-since-midnight count.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Minutes elapsed since 00:00.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// The moment `minutes` later. The count is not wrapped at midnight.
    #[must_use]
    pub const fn offset(self, minutes: u32) -> Self {
        Self(self.0 + minutes)
    }
}

/// Renders as 12-hour `h:mm` without an AM/PM marker. Hours above 12 are
/// reduced once by 12, never taken modulo 24: hour 0 stays 0, hour 12 stays
/// 12, and counts past one day keep climbing (1565 minutes is `14:05`).
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        let display_hours = if hours > 12 { hours - 12 } else { hours };
        write!(f, "{display_hours}:{minutes:02}")
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = TIME_FORMAT
            .captures(s)
            .ok_or_else(|| Error::invalid_format(s))?;
        let hours: u32 = caps[1].parse().map_err(|_| Error::invalid_format(s))?;
        let minutes: u32 = caps[2].parse().map_err(|_| Error::invalid_format(s))?;
        Ok(Self(hours * 60 + minutes))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.to_string())
    }
}
