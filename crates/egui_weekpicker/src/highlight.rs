use chrono::{Datelike as _, NaiveDate};
use egui::{Button, Response, Ui, Vec2, Widget, WidgetText};

use crate::{WeekOfYear, WeekRule};

/// Custom content of a calendar cell, in place of the day of the month.
pub type DateRender<'a> = dyn Fn(NaiveDate) -> WidgetText + 'a;

/// Decides which calendar cells belong to the selected week.
pub struct WeekHighlighter<'a> {
    selected: Option<WeekOfYear>,
    rule: WeekRule,
    date_render: Option<&'a DateRender<'a>>,
}

impl<'a> WeekHighlighter<'a> {
    pub fn new(selection: Option<NaiveDate>, rule: WeekRule) -> Self {
        Self {
            selected: selection.map(|date| rule.week_of(date)),
            rule,
            date_render: None,
        }
    }

    #[inline]
    pub fn date_render(mut self, date_render: Option<&'a DateRender<'a>>) -> Self {
        self.date_render = date_render;
        self
    }

    /// Same week-year *and* week number as the selection.
    pub fn is_selected(&self, candidate: NaiveDate) -> bool {
        self.selected == Some(self.rule.week_of(candidate))
    }

    pub fn render(&self, candidate: NaiveDate) -> DayCell {
        let content = match self.date_render {
            Some(date_render) => date_render(candidate),
            None => candidate.day().to_string().into(),
        };
        DayCell {
            date: candidate,
            content,
            selected: self.is_selected(candidate),
            in_month: true,
            today: false,
        }
    }
}

/// One day of the calendar grid.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct DayCell {
    date: NaiveDate,
    content: WidgetText,
    selected: bool,
    in_month: bool,
    today: bool,
}

impl DayCell {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn content(&self) -> &WidgetText {
        &self.content
    }

    /// Part of the selected week?
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Days of the neighboring months are dimmed.
    #[inline]
    pub fn in_month(mut self, in_month: bool) -> Self {
        self.in_month = in_month;
        self
    }

    /// Today is encircled.
    #[inline]
    pub fn today(mut self, today: bool) -> Self {
        self.today = today;
        self
    }
}

impl Widget for DayCell {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            date: _,
            content,
            selected,
            in_month,
            today,
        } = self;

        let text = if in_month { content } else { content.weak() };
        let size = Vec2::splat(ui.spacing().interact_size.y);
        let response = ui.add(
            Button::new(text)
                .selected(selected)
                .frame(selected)
                .min_size(size),
        );

        if today {
            let stroke = ui.visuals().widgets.inactive.fg_stroke;
            ui.painter()
                .circle_stroke(response.rect.center(), 0.45 * size.y, stroke);
        }

        response
    }
}
