use chrono::Weekday;

use crate::WeekRule;

/// How ordinal numbers are written, for the `wo`/`Wo` format tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Ordinal {
    /// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`
    #[default]
    English,

    /// `1.`, `2.`, `3.`
    Period,
}

impl Ordinal {
    pub fn format(self, n: u32) -> String {
        match self {
            Self::English => {
                let suffix = match (n % 10, n % 100) {
                    (_, 11..=13) => "th",
                    (1, _) => "st",
                    (2, _) => "nd",
                    (3, _) => "rd",
                    _ => "th",
                };
                format!("{n}{suffix}")
            }
            Self::Period => format!("{n}."),
        }
    }
}

/// The strings and week numbering rules a [`crate::WeekPicker`] uses.
///
/// ```
/// let locale = egui_weekpicker::Locale {
///     placeholder: "Pick a sprint".to_owned(),
///     ..egui_weekpicker::Locale::en_gb()
/// };
/// assert_eq!(locale.week_rule, egui_weekpicker::WeekRule::ISO);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Locale {
    /// Shown in the text surface while nothing is selected.
    pub placeholder: String,

    /// Abbreviated weekday names, Monday first.
    pub weekdays_short: [String; 7],

    /// Month names, January first.
    pub months: [String; 12],

    /// Header of the week number column.
    pub week_column: String,

    pub week_rule: WeekRule,

    pub ordinal: Ordinal,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_gb()
    }
}

fn strings<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(ToOwned::to_owned)
}

impl Locale {
    /// English with ISO 8601 weeks.
    pub fn en_gb() -> Self {
        Self {
            placeholder: "Select week".to_owned(),
            weekdays_short: strings(["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]),
            months: strings([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            week_column: "Wk".to_owned(),
            week_rule: WeekRule::ISO,
            ordinal: Ordinal::English,
        }
    }

    /// English with weeks starting on Sunday.
    pub fn en_us() -> Self {
        Self {
            week_rule: WeekRule::US,
            ..Self::en_gb()
        }
    }

    /// German with ISO 8601 weeks.
    pub fn de() -> Self {
        Self {
            placeholder: "Woche auswählen".to_owned(),
            weekdays_short: strings(["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]),
            months: strings([
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ]),
            week_column: "KW".to_owned(),
            week_rule: WeekRule::ISO,
            ordinal: Ordinal::Period,
        }
    }

    pub fn weekday_short(&self, weekday: Weekday) -> &str {
        &self.weekdays_short[weekday.num_days_from_monday() as usize]
    }

    /// `month` is 1-based. Out of range months give an empty string.
    pub fn month_name(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 52, 53]
            .map(|n| Ordinal::English.format(n))
            .into();
        assert_eq!(
            got,
            [
                "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd",
                "52nd", "53rd"
            ]
        );
        assert_eq!(Ordinal::Period.format(7), "7.");
    }

    #[test]
    fn lookups() {
        let de = Locale::de();
        assert_eq!(de.weekday_short(Weekday::Sun), "So");
        assert_eq!(de.month_name(3), "März");
        assert_eq!(de.month_name(0), "");
        assert_eq!(de.month_name(13), "");
        assert_eq!(Locale::en_us().week_rule.first_day, Weekday::Sun);
    }
}
