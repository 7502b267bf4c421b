use chrono::{Datelike as _, NaiveDate};
use egui::{Align, Grid, Id, Layout, RichText, Ui};

use crate::{Locale, WeekHighlighter, week::month_data};

/// Days that can't be picked.
pub type DisabledDate<'a> = dyn Fn(NaiveDate) -> bool + 'a;

/// The month the popup shows. Kept in egui memory while the popup is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CalendarView {
    year: i32,
    month: u32,
}

impl CalendarView {
    fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn add_months(self, months: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

pub(crate) struct CalendarPopup<'a> {
    pub highlighter: WeekHighlighter<'a>,
    pub locale: &'a Locale,
    pub disabled_date: Option<&'a DisabledDate<'a>>,
    pub week_numbers: bool,
    pub today: NaiveDate,

    /// Which month to show when the popup opens.
    pub anchor: NaiveDate,
}

impl CalendarPopup<'_> {
    /// Returns the day the user clicked, if any.
    pub fn draw(&self, ui: &mut Ui, view_id: Id) -> Option<NaiveDate> {
        let mut view = ui
            .data(|data| data.get_temp::<CalendarView>(view_id))
            .unwrap_or_else(|| CalendarView::of(self.anchor));

        ui.horizontal(|ui| {
            if ui.button("<<").on_hover_text("previous year").clicked() {
                view = view.add_months(-12);
            }
            if ui.button("<").on_hover_text("previous month").clicked() {
                view = view.add_months(-1);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(">>").on_hover_text("next year").clicked() {
                    view = view.add_months(12);
                }
                if ui.button(">").on_hover_text("next month").clicked() {
                    view = view.add_months(1);
                }
                ui.centered_and_justified(|ui| {
                    ui.strong(format!("{} {}", self.locale.month_name(view.month), view.year));
                });
            });
        });

        let rule = &self.locale.week_rule;
        let mut picked = None;
        Grid::new(view_id.with("grid"))
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                if self.week_numbers {
                    ui.label(RichText::new(&self.locale.week_column).weak());
                }
                for weekday in rule.weekdays() {
                    ui.label(self.locale.weekday_short(weekday));
                }
                ui.end_row();

                for week in month_data(view.year, view.month, rule) {
                    if self.week_numbers {
                        ui.label(RichText::new(week.number.to_string()).weak());
                    }
                    for day in week.days {
                        let cell = self
                            .highlighter
                            .render(day)
                            .in_month(day.month() == view.month)
                            .today(day == self.today);
                        let enabled = !self.disabled_date.is_some_and(|disabled| disabled(day));
                        if ui.add_enabled(enabled, cell).clicked() {
                            picked = Some(day);
                        }
                    }
                    ui.end_row();
                }
            });

        ui.data_mut(|data| data.insert_temp(view_id, view));
        picked
    }
}
