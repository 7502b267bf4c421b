use chrono::NaiveDate;
use egui::{
    Area, Button, Frame, Id, InnerResponse, Key, Label, Order, Response, RichText, Sense, TextEdit,
    Ui, UiKind, WidgetText,
};

use crate::{
    DateInput, DateRender, DisabledDate, FocusTarget as _, Icon, IconStyle, InputHandle, Listeners,
    Locale, PickerProps, PointerEvent, Result, SelectionState, WeekFormat, WeekHighlighter,
    calendar::{CalendarPopup, CalendarView},
    format_value,
    state::Controller,
};

/// Clicking this clears the selection.
pub const CLEAR_GLYPH: &str = "✖";

/// A read-only text field showing the selected week, opening a calendar when clicked.
///
/// Clicking any day in the calendar selects its whole week.
///
/// Both the value and the open state can be left to the picker (it remembers them between
/// frames) or be *controlled*: passed in every frame with [`Self::value`] / [`Self::open`],
/// in which case the picker only reports what the user did and shows what it is given.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// let mut sprint: Option<chrono::NaiveDate> = None;
/// let response = egui_weekpicker::WeekPicker::new("sprint")
///     .value(sprint)
///     .on_change(|value, text| {
///         sprint = value;
///         println!("sprint {text}");
///     })
///     .show(ui)
///     .unwrap();
/// # let _ = response;
/// # });
/// ```
#[must_use = "You should call .show()"]
pub struct WeekPicker<'a> {
    id_salt: Id,
    value: Option<Option<NaiveDate>>,
    default_value: Option<DateInput>,
    open: Option<Option<bool>>,
    default_open: bool,
    format: WeekFormat,
    allow_clear: bool,
    disabled: bool,
    disabled_date: Option<Box<DisabledDate<'a>>>,
    date_render: Option<Box<DateRender<'a>>>,
    suffix_icon: Option<Icon>,
    placeholder: Option<String>,
    locale: Locale,
    desired_width: f32,
    popup_width: f32,
    week_numbers: bool,
    today: Option<NaiveDate>,
    listeners: Listeners<'a>,
    on_focus: Option<Box<dyn FnMut() + 'a>>,
    on_blur: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> WeekPicker<'a> {
    /// `id_salt` must be unique among the pickers in the same [`Ui`].
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            value: None,
            default_value: None,
            open: None,
            default_open: false,
            format: WeekFormat::default(),
            allow_clear: true,
            disabled: false,
            disabled_date: None,
            date_render: None,
            suffix_icon: None,
            placeholder: None,
            locale: Locale::default(),
            desired_width: 140.0,
            popup_width: 260.0,
            week_numbers: true,
            today: None,
            listeners: Listeners::default(),
            on_focus: None,
            on_blur: None,
        }
    }

    /// Control the selected week. `None` means "controlled, nothing selected".
    ///
    /// The picker will never change the value itself, so update it from [`Self::on_change`].
    #[inline]
    pub fn value(mut self, value: Option<NaiveDate>) -> Self {
        self.value = Some(value);
        self
    }

    /// The initial selection of an uncontrolled picker.
    ///
    /// Checked the first time the picker is shown: if it isn't a date, [`Self::show`] fails.
    #[inline]
    pub fn default_value(mut self, default_value: impl Into<DateInput>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Control whether the calendar is shown. `None` means "controlled, closed".
    ///
    /// Update it from [`Self::on_open_change`].
    #[inline]
    pub fn open(mut self, open: Option<bool>) -> Self {
        self.open = Some(open);
        self
    }

    /// Show the calendar the first time an uncontrolled picker is shown. (Default: false)
    #[inline]
    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    /// How the selected week is shown. (Default: `gggg-wo`, e.g. `2024-2nd`)
    #[inline]
    pub fn format(mut self, format: WeekFormat) -> Self {
        self.format = format;
        self
    }

    /// Show a glyph clearing the selection. (Default: true)
    #[inline]
    pub fn allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    /// Disable all interaction. (Default: false)
    #[inline]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Days for which this returns `true` can't be clicked.
    #[inline]
    pub fn disabled_date(mut self, disabled_date: impl Fn(NaiveDate) -> bool + 'a) -> Self {
        self.disabled_date = Some(Box::new(disabled_date));
        self
    }

    /// What to show in a calendar cell instead of the day of the month.
    #[inline]
    pub fn date_render(mut self, date_render: impl Fn(NaiveDate) -> WidgetText + 'a) -> Self {
        self.date_render = Some(Box::new(date_render));
        self
    }

    /// Replace the calendar glyph after the text.
    ///
    /// Style the icon doesn't set itself is taken from the picker.
    #[inline]
    pub fn suffix_icon(mut self, icon: Icon) -> Self {
        self.suffix_icon = Some(icon);
        self
    }

    /// Shown while nothing is selected. (Default: [`Locale::placeholder`])
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// (Default: [`Locale::en_gb`])
    #[inline]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Width of the text field. (Default: 140)
    #[inline]
    pub fn desired_width(mut self, desired_width: f32) -> Self {
        self.desired_width = desired_width;
        self
    }

    /// Width of the calendar popup. (Default: 260)
    #[inline]
    pub fn popup_width(mut self, popup_width: f32) -> Self {
        self.popup_width = popup_width;
        self
    }

    /// Show the week number in front of each calendar row. (Default: true)
    #[inline]
    pub fn week_numbers(mut self, week_numbers: bool) -> Self {
        self.week_numbers = week_numbers;
        self
    }

    /// Which day the calendar marks as today. (Default: the local date)
    #[inline]
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Called with the picked value (`None` when cleared) and its formatted text.
    ///
    /// Called for controlled pickers too.
    #[inline]
    pub fn on_change(mut self, on_change: impl FnMut(Option<NaiveDate>, &str) + 'a) -> Self {
        self.listeners.on_change = Some(Box::new(on_change));
        self
    }

    /// Called when the calendar wants to open or close.
    #[inline]
    pub fn on_open_change(mut self, on_open_change: impl FnMut(bool) + 'a) -> Self {
        self.listeners.on_open_change = Some(Box::new(on_open_change));
        self
    }

    /// Called when the text field gains keyboard focus, including when the picker gives it focus.
    #[inline]
    pub fn on_focus(mut self, on_focus: impl FnMut() + 'a) -> Self {
        self.on_focus = Some(Box::new(on_focus));
        self
    }

    /// Called when the text field loses keyboard focus.
    #[inline]
    pub fn on_blur(mut self, on_blur: impl FnMut() + 'a) -> Self {
        self.on_blur = Some(Box::new(on_blur));
        self
    }

    /// Show the picker.
    ///
    /// # Errors
    /// [`crate::Error::InvalidValue`] the first time a picker is shown with a
    /// [default value](Self::default_value) that isn't a date.
    pub fn show(self, ui: &mut Ui) -> Result<WeekPickerResponse> {
        let Self {
            id_salt,
            value,
            default_value,
            open,
            default_open,
            format,
            allow_clear,
            disabled,
            disabled_date,
            date_render,
            suffix_icon,
            placeholder,
            locale,
            desired_width,
            popup_width,
            week_numbers,
            today,
            listeners,
            mut on_focus,
            mut on_blur,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let props = PickerProps { value, open };

        let prior = match ui.data(|data| data.get_temp::<SelectionState>(id)) {
            Some(prior) => prior,
            None => SelectionState::new(
                value.flatten().map(DateInput::Date),
                default_value,
                Some(open.flatten().unwrap_or(default_open)),
            )?,
        };
        let state = prior.reconcile(&props);
        if state != prior {
            log::debug!("week picker {id:?} reconciled to {state:?}");
        }

        let mut controller = Controller::new(state, props, &format, &locale)
            .listeners(listeners)
            .disabled(disabled)
            .allow_clear(allow_clear);

        // The text surface, the clear glyph and the suffix glyph:
        let text = controller.formatted();
        let placeholder = placeholder.unwrap_or_else(|| locale.placeholder.clone());
        let show_clear = controller.show_clear();
        let icon = suffix_icon
            .unwrap_or_default()
            .merged(&IconStyle::picker(ui.visuals()));

        let (mut response, clear_clicked, icon_clicked) = ui
            .add_enabled_ui(!disabled, |ui| {
                ui.horizontal(|ui| {
                    let mut shown = text.as_str();
                    let response = ui.add(
                        TextEdit::singleline(&mut shown)
                            .hint_text(placeholder.as_str())
                            .desired_width(desired_width),
                    );

                    let clear_clicked = show_clear
                        && ui
                            .add(Button::new(RichText::new(CLEAR_GLYPH).weak()).frame(false))
                            .on_hover_text("Clear")
                            .clicked();

                    let mut icon_response =
                        ui.add(Label::new(icon.rich_text()).sense(Sense::click()));
                    if let Some(hover_text) = &icon.style().hover_text {
                        icon_response = icon_response.on_hover_text(hover_text.as_str());
                    }

                    (response, clear_clicked, icon_response.clicked())
                })
                .inner
            })
            .inner;

        // Focus as reported to `on_focus`/`on_blur` at the end of the previous frame.
        let focus_id = id.with("focused");
        let was_focused = ui
            .data(|data| data.get_temp::<bool>(focus_id))
            .unwrap_or(false);

        let mut event = PointerEvent::default();
        if clear_clicked
            && controller.clear_selection(&mut event)
            && event.is_default_prevented()
            && was_focused
        {
            // The click on the glyph doesn't take focus from the text surface.
            response.request_focus();
        }

        let surface_clicked = !disabled && (response.clicked() || icon_clicked);
        if surface_clicked && !event.is_propagation_stopped() {
            response.request_focus();
            let open = !controller.state().open;
            controller.handle_open_change(open);
        }

        // The calendar popup:
        let popup_id = id.with("popup");
        let view_id = id.with("view");
        if controller.state().open && !disabled {
            let mut pos = response.rect.left_bottom();
            let width_with_padding = popup_width
                + ui.style().spacing.item_spacing.x
                + ui.style().spacing.window_margin.leftf()
                + ui.style().spacing.window_margin.rightf();
            if pos.x + width_with_padding > ui.clip_rect().right() {
                pos.x = response.rect.right() - width_with_padding;
            }
            pos.x = pos.x.max(ui.style().spacing.window_margin.leftf());

            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let selection = controller.state().value;
            let calendar = CalendarPopup {
                highlighter: WeekHighlighter::new(selection, locale.week_rule)
                    .date_render(date_render.as_deref()),
                locale: &locale,
                disabled_date: disabled_date.as_deref(),
                week_numbers,
                today,
                anchor: selection.unwrap_or(today),
            };

            let InnerResponse {
                inner: picked,
                response: area_response,
            } = Area::new(popup_id)
                .kind(UiKind::Picker)
                .order(Order::Foreground)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style())
                        .show(ui, |ui| {
                            ui.set_min_width(popup_width);
                            ui.set_max_width(popup_width);
                            calendar.draw(ui, view_id)
                        })
                        .inner
                });

            if let Some(day) = picked {
                controller.handle_selection_change(Some(day));
                controller.handle_open_change(false);
            } else if !surface_clicked
                && !event.is_propagation_stopped()
                && (ui.input(|i| i.key_pressed(Key::Escape)) || area_response.clicked_elsewhere())
            {
                controller.handle_open_change(false);
            }
        }

        let committed = controller.finish();
        ui.data_mut(|data| {
            data.insert_temp(id, committed.state.clone());
            if !committed.state.open {
                data.remove::<CalendarView>(view_id);
            }
        });
        committed.apply_effects(&mut InputHandle::new(ui.ctx().clone(), response.id));

        let focused = ui.memory(|mem| mem.has_focus(response.id));
        ui.data_mut(|data| data.insert_temp(focus_id, focused));
        match (was_focused, focused) {
            (false, true) => {
                if let Some(on_focus) = &mut on_focus {
                    on_focus();
                }
            }
            (true, false) => {
                if let Some(on_blur) = &mut on_blur {
                    on_blur();
                }
            }
            _ => {}
        }

        if committed.changed {
            response.mark_changed();
        }

        Ok(WeekPickerResponse {
            formatted: format_value(committed.state.value, &format, &locale),
            value: committed.state.value,
            open: committed.state.open && !disabled,
            changed: committed.changed,
            open_changed: committed.open_changed,
            response,
        })
    }
}

/// What [`WeekPicker::show`] returns.
#[derive(Debug)]
pub struct WeekPickerResponse {
    /// The response of the text field.
    pub response: Response,

    /// The selection after this frame.
    pub value: Option<NaiveDate>,

    /// [`Self::value`] as shown in the text field.
    pub formatted: String,

    /// Is the calendar shown?
    ///
    /// Always `false` for a disabled picker, even if its open state is `true`.
    pub open: bool,

    /// The user picked or cleared a week this frame.
    ///
    /// For a controlled picker, [`Self::value`] only changes once you pass the new value.
    pub changed: bool,

    /// The user opened or closed the calendar this frame.
    pub open_changed: bool,
}

impl WeekPickerResponse {
    /// Keyboard focus of the text field.
    pub fn input(&self) -> InputHandle {
        InputHandle::new(self.response.ctx.clone(), self.response.id)
    }

    /// Give keyboard focus to the text field.
    pub fn focus(&self) {
        self.input().focus();
    }

    /// Take keyboard focus from the text field.
    pub fn blur(&self) {
        self.input().blur();
    }
}
