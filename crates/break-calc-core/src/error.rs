//! Error types for break computation.

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning user input into a break schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input did not match 24-hour `HH:mm`.
    #[error("invalid time format: {0:?} (expected 24-hour HH:mm)")]
    InvalidFormat(String),
}

impl Error {
    /// Build an [`Error::InvalidFormat`] preserving the offending input.
    #[must_use]
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_message_quotes_the_input() {
        let err = Error::invalid_format("25:99");
        assert_eq!(
            err.to_string(),
            "invalid time format: \"25:99\" (expected 24-hour HH:mm)"
        );
    }
}
