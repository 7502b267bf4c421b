use chrono::{Datelike as _, Days, NaiveDate, Weekday};

/// How weeks are numbered within a year.
///
/// Week 1 of a week-year is the first week (starting on [`Self::first_day`]) that contains at
/// least [`Self::min_days_in_first_week`] days of January.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WeekRule {
    /// The weekday a week starts on.
    pub first_day: Weekday,

    /// `4` for ISO 8601, `1` if the week containing the 1st of January is always week 1.
    pub min_days_in_first_week: u8,
}

impl Default for WeekRule {
    fn default() -> Self {
        Self::ISO
    }
}

impl WeekRule {
    /// ISO 8601: weeks start on Monday, week 1 contains the 4th of January.
    pub const ISO: Self = Self {
        first_day: Weekday::Mon,
        min_days_in_first_week: 4,
    };

    /// North American: weeks start on Sunday, week 1 contains the 1st of January.
    pub const US: Self = Self {
        first_day: Weekday::Sun,
        min_days_in_first_week: 1,
    };

    /// The first day of the week `date` belongs to.
    ///
    /// `date` itself if that day is before [`NaiveDate::MIN`].
    pub fn week_start(&self, date: NaiveDate) -> NaiveDate {
        let offset = (7 + date.weekday().num_days_from_monday()
            - self.first_day.num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(date)
    }

    /// Weekdays in display order, starting with [`Self::first_day`].
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.first_day; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    fn first_week_start(&self, year: i32) -> Option<NaiveDate> {
        let anchor = u32::from(self.min_days_in_first_week.clamp(1, 7));
        NaiveDate::from_yo_opt(year, anchor).map(|jan| self.week_start(jan))
    }

    /// The `(week-year, week)` pair `date` falls in.
    pub fn week_of(&self, date: NaiveDate) -> WeekOfYear {
        let year = date.year();
        let week_year = if self
            .first_week_start(year + 1)
            .is_some_and(|next| date >= next)
        {
            year + 1
        } else if self.first_week_start(year).is_some_and(|start| date < start) {
            year - 1
        } else {
            year
        };

        // Only out of range at chrono's extreme years.
        let first = self.first_week_start(week_year).unwrap_or(date);
        let days = (self.week_start(date) - first).num_days();
        WeekOfYear {
            year: week_year,
            week: (days / 7 + 1) as u32,
        }
    }
}

/// A week identified by its week-year and week number.
///
/// The week-year differs from the calendar year around new year:
/// 2024-12-30 is in ISO week 1 of 2025.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WeekOfYear {
    pub year: i32,
    pub week: u32,
}

impl std::fmt::Display for WeekOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// One row of the calendar grid.
#[derive(Debug)]
pub(crate) struct Week {
    pub number: u32,
    pub days: Vec<NaiveDate>,
}

/// The rows of the calendar grid for a month, padded with days of the neighboring months so
/// that every row is a full week.
pub(crate) fn month_data(year: i32, month: u32, rule: &WeekRule) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return vec![];
    };
    let mut day = rule.week_start(first);
    let mut weeks = vec![];
    let mut week = vec![];
    while day < first || day.month() == first.month() || day.weekday() != rule.first_day {
        week.push(day);

        if week.len() == 7 {
            weeks.push(Week {
                number: rule.week_of(week[0]).week,
                days: std::mem::take(&mut week),
            });
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }

    weeks
}
