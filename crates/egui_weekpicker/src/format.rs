use chrono::{Datelike as _, NaiveDate};

use crate::{Error, Locale, Result, WeekRule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Numbering {
    /// The locale's [`WeekRule`].
    Locale,
    Iso,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Item {
    Literal(String),
    WeekYear(Numbering, Width),
    Week(Numbering, Width),
    Year(Width),
    Month(Width),
    Day(Width),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Width {
    Plain,
    TwoDigits,
    FourDigits,
    Ordinal,
}

/// Longest tokens first, so `gggg` wins over `gg`.
const TOKENS: &[(&str, Item)] = &[
    ("gggg", Item::WeekYear(Numbering::Locale, Width::FourDigits)),
    ("GGGG", Item::WeekYear(Numbering::Iso, Width::FourDigits)),
    ("YYYY", Item::Year(Width::FourDigits)),
    ("gg", Item::WeekYear(Numbering::Locale, Width::TwoDigits)),
    ("GG", Item::WeekYear(Numbering::Iso, Width::TwoDigits)),
    ("YY", Item::Year(Width::TwoDigits)),
    ("wo", Item::Week(Numbering::Locale, Width::Ordinal)),
    ("Wo", Item::Week(Numbering::Iso, Width::Ordinal)),
    ("ww", Item::Week(Numbering::Locale, Width::TwoDigits)),
    ("WW", Item::Week(Numbering::Iso, Width::TwoDigits)),
    ("MM", Item::Month(Width::TwoDigits)),
    ("DD", Item::Day(Width::TwoDigits)),
    ("w", Item::Week(Numbering::Locale, Width::Plain)),
    ("W", Item::Week(Numbering::Iso, Width::Plain)),
    ("M", Item::Month(Width::Plain)),
    ("D", Item::Day(Width::Plain)),
];

/// A display template for a selected week.
///
/// | Token | Meaning | Example (2024-01-10, ISO) |
/// |---|---|---|
/// | `gggg` / `gg` | week-year by the locale's [`WeekRule`] | `2024` / `24` |
/// | `wo` / `ww` / `w` | week number by the locale's [`WeekRule`] | `2nd` / `02` / `2` |
/// | `GGGG` / `GG` | ISO 8601 week-year | `2024` / `24` |
/// | `Wo` / `WW` / `W` | ISO 8601 week number | `2nd` / `02` / `2` |
/// | `YYYY` / `YY` | calendar year | `2024` / `24` |
/// | `MM` / `M` | month | `01` / `1` |
/// | `DD` / `D` | day of month | `10` / `10` |
/// | `[text]` | literal text | `text` |
///
/// Every other character is copied as is.
///
/// ```
/// use egui_weekpicker::{Locale, WeekFormat};
///
/// let format = WeekFormat::parse("gggg [week] ww").unwrap();
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(format.format(date, &Locale::en_gb()), "2024 week 02");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct WeekFormat {
    template: String,
    items: Vec<Item>,
}

impl Default for WeekFormat {
    /// `gggg-wo`, e.g. `2024-2nd`.
    fn default() -> Self {
        Self {
            template: Self::DEFAULT.to_owned(),
            items: vec![
                Item::WeekYear(Numbering::Locale, Width::FourDigits),
                Item::Literal("-".to_owned()),
                Item::Week(Numbering::Locale, Width::Ordinal),
            ],
        }
    }
}

impl WeekFormat {
    pub const DEFAULT: &'static str = "gggg-wo";

    /// # Errors
    /// If the template is empty or has an unterminated `[` literal.
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidFormat {
            format: template.to_owned(),
            reason,
        };
        if template.is_empty() {
            return Err(invalid("empty template"));
        }

        let mut items: Vec<Item> = vec![];
        let mut rest = template;
        while let Some(c) = rest.chars().next() {
            if c == '[' {
                let end = rest.find(']').ok_or_else(|| invalid("unterminated `[`"))?;
                push_literal(&mut items, &rest[1..end]);
                rest = &rest[end + 1..];
            } else if let Some((token, item)) =
                TOKENS.iter().find(|(token, _)| rest.starts_with(token))
            {
                items.push(item.clone());
                rest = &rest[token.len()..];
            } else {
                push_literal(&mut items, &rest[..c.len_utf8()]);
                rest = &rest[c.len_utf8()..];
            }
        }

        Ok(Self {
            template: template.to_owned(),
            items,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn format(&self, date: NaiveDate, locale: &Locale) -> String {
        let week_of = |numbering| match numbering {
            Numbering::Locale => locale.week_rule.week_of(date),
            Numbering::Iso => WeekRule::ISO.week_of(date),
        };

        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Literal(text) => out.push_str(text),
                Item::WeekYear(numbering, width) => {
                    push_year(&mut out, week_of(*numbering).year, *width);
                }
                Item::Week(numbering, width) => {
                    push_number(&mut out, week_of(*numbering).week, *width, locale);
                }
                Item::Year(width) => push_year(&mut out, date.year(), *width),
                Item::Month(width) => push_number(&mut out, date.month(), *width, locale),
                Item::Day(width) => push_number(&mut out, date.day(), *width, locale),
            }
        }
        out
    }
}

/// The text shown for a selection: empty when nothing is selected.
pub fn format_value(value: Option<NaiveDate>, format: &WeekFormat, locale: &Locale) -> String {
    value.map_or_else(String::new, |date| format.format(date, locale))
}

fn push_literal(items: &mut Vec<Item>, text: &str) {
    if let Some(Item::Literal(last)) = items.last_mut() {
        last.push_str(text);
    } else {
        items.push(Item::Literal(text.to_owned()));
    }
}

fn push_year(out: &mut String, year: i32, width: Width) {
    use std::fmt::Write as _;
    if width == Width::TwoDigits {
        write!(out, "{:02}", year.rem_euclid(100)).ok();
    } else {
        write!(out, "{year:04}").ok();
    }
}

fn push_number(out: &mut String, n: u32, width: Width, locale: &Locale) {
    use std::fmt::Write as _;
    match width {
        Width::Ordinal => out.push_str(&locale.ordinal.format(n)),
        Width::TwoDigits | Width::FourDigits => {
            write!(out, "{n:02}").ok();
        }
        Width::Plain => {
            write!(out, "{n}").ok();
        }
    }
}

impl std::str::FromStr for WeekFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WeekFormat {
    type Error = Error;

    fn try_from(template: String) -> Result<Self> {
        Self::parse(&template)
    }
}

impl From<WeekFormat> for String {
    fn from(format: WeekFormat) -> Self {
        format.template
    }
}

impl std::fmt::Display for WeekFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}
