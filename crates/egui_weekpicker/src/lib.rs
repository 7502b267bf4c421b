//! A week picker for [`egui`](https://github.com/emilk/egui).
//!
//! [`WeekPicker`] is a read-only text field showing the selected week. Clicking it opens a
//! calendar where clicking any day selects that day's whole week.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! let response = egui_weekpicker::WeekPicker::new("release")
//!     .default_value("2024-01-10")
//!     .show(ui)
//!     .unwrap();
//! assert_eq!(response.formatted, "2024-2nd");
//! # });
//! ```
//!
//! The building blocks of the widget ([`SelectionState`], [`Controller`], [`WeekHighlighter`],
//! [`WeekFormat`]) don't need a [`egui::Ui`] and can be used on their own.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod calendar;
mod error;
mod focus;
mod format;
mod highlight;
mod icon;
mod input;
mod locale;
mod picker;
mod state;
mod week;

pub use crate::calendar::DisabledDate;
pub use crate::error::{Error, Result};
pub use crate::focus::{FocusTarget, InputHandle};
pub use crate::format::{WeekFormat, format_value};
pub use crate::highlight::{DateRender, DayCell, WeekHighlighter};
pub use crate::icon::{Icon, IconStyle};
pub use crate::input::DateInput;
pub use crate::locale::{Locale, Ordinal};
pub use crate::picker::{CLEAR_GLYPH, WeekPicker, WeekPickerResponse};
pub use crate::state::{
    Committed, Controller, Listeners, PickerProps, PointerEvent, SelectionState, show_clear,
};
pub use crate::week::{WeekOfYear, WeekRule};
