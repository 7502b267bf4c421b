/// Errors from configuring a [`crate::WeekPicker`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The initial value (or default value) could not be read as a calendar date.
    #[error(
        "the value/default value of WeekPicker must be a calendar date \
         (chrono::NaiveDate, NaiveDateTime, DateTime or a `YYYY-MM-DD` string), got {input:?}"
    )]
    InvalidValue { input: String },

    /// A [`crate::WeekFormat`] template could not be parsed.
    #[error("invalid week format {format:?}: {reason}")]
    InvalidFormat { format: String, reason: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
