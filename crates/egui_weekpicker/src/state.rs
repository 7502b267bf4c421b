//! Ownership of the selected week and the popup flag.
//!
//! Each of `value` and `open` is either *controlled* (the caller passes it every frame and is
//! the only one who changes it) or *uncontrolled* (the picker keeps it in egui memory).
//! Which one is decided anew every frame by whether the caller passed the property at all.

use chrono::NaiveDate;

use crate::{DateInput, Error, FocusTarget, Locale, Result, WeekFormat, format_value};

/// What the picker remembers between frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Any day of the selected week.
    pub value: Option<NaiveDate>,

    /// Is the calendar popup shown?
    pub open: bool,
}

/// The controlled properties passed this frame.
///
/// The outer [`Option`] is whether the property was passed at all. `Some(None)` is a passed
/// property without a value: for `value` that is "controlled, nothing selected", for `open`
/// it is "controlled, closed".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickerProps {
    pub value: Option<Option<NaiveDate>>,
    pub open: Option<Option<bool>>,
}

impl PickerProps {
    pub fn is_value_controlled(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_open_controlled(&self) -> bool {
        self.open.is_some()
    }
}

impl SelectionState {
    /// The state of a picker shown for the first time.
    ///
    /// Uses `value`, falling back to `default_value`.
    ///
    /// # Errors
    /// [`Error::InvalidValue`] if the chosen input is not a calendar date.
    pub fn new(
        value: Option<DateInput>,
        default_value: Option<DateInput>,
        open: Option<bool>,
    ) -> Result<Self> {
        let value = match value.or(default_value) {
            Some(input) => Some(input.resolve().ok_or_else(|| Error::InvalidValue {
                input: input.to_string(),
            })?),
            None => None,
        };
        let state = Self {
            value,
            open: open.unwrap_or(false),
        };
        log::debug!("new week picker state: {state:?}");
        Ok(state)
    }

    /// Overwrite every controlled property with the value the caller passed.
    ///
    /// Properties the caller did not pass keep their current value.
    #[must_use]
    pub fn reconcile(&self, props: &PickerProps) -> Self {
        Self {
            value: props.value.unwrap_or(self.value),
            open: props.open.map_or(self.open, |open| open.unwrap_or(false)),
        }
    }
}

/// Should the clear glyph be shown (and be able to clear)?
pub fn show_clear(disabled: bool, allow_clear: bool, value: Option<NaiveDate>) -> bool {
    !disabled && allow_clear && value.is_some()
}

/// The click that triggered a reaction, shared by every handler reacting to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    /// Don't do what the click normally does (move keyboard focus to the text surface).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Don't let the click reach handlers further out, like the popup toggle.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Callbacks notified of changes, whether or not the property is controlled.
#[derive(Default)]
pub struct Listeners<'a> {
    /// Called with the new value and its formatted text.
    pub on_change: Option<Box<dyn FnMut(Option<NaiveDate>, &str) + 'a>>,
    pub on_open_change: Option<Box<dyn FnMut(bool) + 'a>>,
}

/// Handles the events of one frame against a reconciled [`SelectionState`].
pub struct Controller<'a> {
    state: SelectionState,
    props: PickerProps,
    format: &'a WeekFormat,
    locale: &'a Locale,
    listeners: Listeners<'a>,
    disabled: bool,
    allow_clear: bool,
    changed: bool,
    open_changed: bool,
    return_focus: bool,
}

impl<'a> Controller<'a> {
    /// `state` should already be [reconciled](SelectionState::reconcile) with `props`.
    pub fn new(
        state: SelectionState,
        props: PickerProps,
        format: &'a WeekFormat,
        locale: &'a Locale,
    ) -> Self {
        Self {
            state,
            props,
            format,
            locale,
            listeners: Listeners::default(),
            disabled: false,
            allow_clear: true,
            changed: false,
            open_changed: false,
            return_focus: false,
        }
    }

    #[inline]
    pub fn listeners(mut self, listeners: Listeners<'a>) -> Self {
        self.listeners = listeners;
        self
    }

    #[inline]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[inline]
    pub fn allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn formatted(&self) -> String {
        format_value(self.state.value, self.format, self.locale)
    }

    pub fn show_clear(&self) -> bool {
        show_clear(self.disabled, self.allow_clear, self.state.value)
    }

    /// The user picked `value` (or cleared it with `None`).
    pub fn handle_selection_change(&mut self, value: Option<NaiveDate>) {
        if self.props.is_value_controlled() {
            log::debug!("week picker value is controlled, reporting {value:?}");
        } else {
            log::debug!("week picker value: {:?} -> {value:?}", self.state.value);
            self.state.value = value;
        }
        self.changed = true;

        if let Some(on_change) = &mut self.listeners.on_change {
            let formatted = format_value(value, self.format, self.locale);
            on_change(value, &formatted);
        }
    }

    /// The popup wants to open or close.
    ///
    /// Closing returns keyboard focus to the text surface once the frame is committed.
    pub fn handle_open_change(&mut self, open: bool) {
        if !self.props.is_open_controlled() {
            self.state.open = open;
        }
        self.open_changed = true;

        if let Some(on_open_change) = &mut self.listeners.on_open_change {
            on_open_change(open);
        }

        if !open {
            self.return_focus = true;
        }
    }

    /// The clear glyph was clicked.
    ///
    /// Does nothing (and returns `false`) if the clear glyph is not shown.
    pub fn clear_selection(&mut self, event: &mut PointerEvent) -> bool {
        if !self.show_clear() {
            return false;
        }
        event.prevent_default();
        event.stop_propagation();
        self.handle_selection_change(None);
        true
    }

    pub fn finish(self) -> Committed {
        Committed {
            state: self.state,
            changed: self.changed,
            open_changed: self.open_changed,
            return_focus: self.return_focus,
        }
    }
}

/// The outcome of a frame, to be stored before its effects are run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed {
    pub state: SelectionState,

    /// A selection change was requested this frame.
    pub changed: bool,

    /// An open/close was requested this frame.
    pub open_changed: bool,

    return_focus: bool,
}

impl Committed {
    /// Run the side effects of the frame. Call after storing [`Self::state`].
    pub fn apply_effects(&self, input: &mut dyn FocusTarget) {
        if self.return_focus {
            input.focus();
        }
    }
}
