use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A raw initial value for a [`crate::WeekPicker`], checked once when the picker is created.
///
/// Only the date part matters: the time of day is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),

    /// `YYYY-MM-DD`, or an RFC 3339 timestamp.
    Text(String),
}

impl DateInput {
    /// The calendar date this input denotes, if it is one.
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::DateTime(date_time) => Some(date_time.date()),
            Self::Text(text) => {
                let text = text.trim();
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .or_else(|| {
                        DateTime::parse_from_rfc3339(text)
                            .ok()
                            .map(|date_time| date_time.date_naive())
                    })
            }
        }
    }
}

impl std::fmt::Display for DateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::DateTime(date_time) => write!(f, "{date_time}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::DateTime(date_time)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    /// Uses the date in the time zone of the value.
    fn from(date_time: DateTime<Tz>) -> Self {
        Self::DateTime(date_time.naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
