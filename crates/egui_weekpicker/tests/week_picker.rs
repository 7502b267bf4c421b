use chrono::{Datelike as _, NaiveDate};
use egui::{Id, WidgetText};
use egui_kittest::Harness;
use egui_weekpicker::{CLEAR_GLYPH, Error, Icon, WeekPicker};
use kittest::Queryable as _;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 10)
}

#[derive(Default)]
struct State {
    value: Option<NaiveDate>,
    formatted: String,
    open: bool,
    input: Option<Id>,
    changes: Vec<(Option<NaiveDate>, String)>,
    open_changes: Vec<bool>,
    focus_count: usize,
    blur_count: usize,
    error: Option<Error>,
}

impl State {
    fn show(&mut self, ui: &mut egui::Ui, picker: WeekPicker<'_>) {
        match picker.show(ui) {
            Ok(response) => {
                self.value = response.value;
                self.formatted = response.formatted;
                self.open = response.open;
                self.input = Some(response.response.id);
            }
            Err(err) => self.error = Some(err),
        }
    }
}

fn has_focus(harness: &Harness<'_, State>) -> bool {
    let id = harness.state().input.unwrap();
    harness.ctx.memory(|mem| mem.has_focus(id))
}

#[test]
fn picking_a_day_selects_its_week() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let mut changes = vec![];
            let picker = WeekPicker::new("sprint")
                .default_value("2024-01-10")
                .today(today())
                .on_change(|value, text: &str| changes.push((value, text.to_owned())));
            state.show(ui, picker);
            state.changes.extend(changes);
        },
        State::default(),
    );
    harness.run();
    assert_eq!(harness.state().formatted, "2024-2nd");
    assert!(!harness.state().open);

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    assert!(harness.state().open);

    harness.get_by_label("15").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.value, Some(date(2024, 1, 15)));
    assert_eq!(state.formatted, "2024-3rd");
    assert!(!state.open);
    assert_eq!(
        state.changes,
        vec![(Some(date(2024, 1, 15)), "2024-3rd".to_owned())]
    );
    assert!(has_focus(&harness), "closing the calendar returns focus");
}

#[test]
fn clear_glyph_clears_without_opening() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let mut open_changes = vec![];
            let picker = WeekPicker::new("sprint")
                .default_value(date(2024, 1, 10))
                .today(today())
                .on_open_change(|open| open_changes.push(open));
            state.show(ui, picker);
            state.open_changes.extend(open_changes);
        },
        State::default(),
    );
    harness.run();

    harness.get_by_label(CLEAR_GLYPH).click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.value, None);
    assert_eq!(state.formatted, "");
    assert!(!state.open);
    assert!(state.open_changes.is_empty());
    assert!(harness.query_by_label(CLEAR_GLYPH).is_none());
}

#[test]
fn controlled_value_only_reports() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let mut changes = vec![];
            let picker = WeekPicker::new("sprint")
                .value(Some(date(2024, 1, 10)))
                .today(today())
                .on_change(|value, text: &str| changes.push((value, text.to_owned())));
            state.show(ui, picker);
            state.changes.extend(changes);
        },
        State::default(),
    );
    harness.run();

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    harness.get_by_label("15").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.value, Some(date(2024, 1, 10)));
    assert_eq!(state.formatted, "2024-2nd");
    assert!(!state.open, "the open state is still uncontrolled");
    assert_eq!(
        state.changes,
        vec![(Some(date(2024, 1, 15)), "2024-3rd".to_owned())]
    );
}

#[test]
fn controlled_closed_stays_closed() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let mut open_changes = vec![];
            let picker = WeekPicker::new("sprint")
                .open(None)
                .today(today())
                .on_open_change(|open| open_changes.push(open));
            state.show(ui, picker);
            state.open_changes.extend(open_changes);
        },
        State::default(),
    );
    harness.run();

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();

    let state = harness.state();
    assert!(!state.open);
    assert_eq!(state.open_changes, vec![true]);
    assert!(harness.query_by_label("15").is_none());
}

#[test]
fn escape_closes_the_calendar() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint")
                .default_open(true)
                .today(today());
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();
    assert!(harness.state().open);
    assert!(harness.query_by_label("15").is_some());

    harness.key_press(egui::Key::Escape);
    harness.run();

    assert!(!harness.state().open);
    assert!(harness.query_by_label("15").is_none());
}

#[test]
fn disabled_picker_reports_closed() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint")
                .default_open(true)
                .disabled(true)
                .today(today());
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();

    assert!(!harness.state().open);
    assert!(harness.query_by_label("15").is_none());
}

#[test]
fn disabled_picker_has_no_clear_glyph() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint")
                .default_value("2024-01-10")
                .disabled(true)
                .today(today());
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();

    assert!(harness.query_by_label(CLEAR_GLYPH).is_none());
    assert_eq!(harness.state().formatted, "2024-2nd");
}

#[test]
fn no_clear_glyph_without_value() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            state.show(ui, WeekPicker::new("sprint").today(today()));
        },
        State::default(),
    );
    harness.run();

    assert!(harness.query_by_label(CLEAR_GLYPH).is_none());
    assert_eq!(harness.state().value, None);
}

#[test]
fn invalid_default_value_is_an_error() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint").default_value("not-a-date");
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();

    assert_eq!(
        harness.state().error,
        Some(Error::InvalidValue {
            input: "not-a-date".to_owned()
        })
    );
    assert_eq!(harness.state().input, None);
}

/// A picker next to an unrelated button, counting focus changes of the text field.
fn harness_with_neighbor() -> Harness<'static, State> {
    Harness::new_ui_state(
        |ui, state: &mut State| {
            let (mut focus_count, mut blur_count) = (0, 0);
            let picker = WeekPicker::new("sprint")
                .default_value("2024-01-10")
                .today(today())
                .on_focus(|| focus_count += 1)
                .on_blur(|| blur_count += 1);
            state.show(ui, picker);
            state.focus_count += focus_count;
            state.blur_count += blur_count;
            let _ = ui.button("Elsewhere");
        },
        State::default(),
    )
}

#[test]
fn focus_changes_are_forwarded() {
    let mut harness = harness_with_neighbor();
    harness.run();
    assert_eq!(harness.state().focus_count, 0);

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    assert!(harness.state().open);
    assert!(has_focus(&harness));
    assert_eq!(harness.state().focus_count, 1);

    harness.key_press(egui::Key::Escape);
    harness.run();
    assert!(!harness.state().open);
    assert!(has_focus(&harness), "closing the calendar returns focus");
    assert_eq!(
        (harness.state().focus_count, harness.state().blur_count),
        (1, 0)
    );

    harness.get_by_label("Elsewhere").click();
    harness.run();
    assert!(!has_focus(&harness));
    assert_eq!(
        (harness.state().focus_count, harness.state().blur_count),
        (1, 1)
    );
}

#[test]
fn clicking_the_surface_again_closes() {
    let mut harness = harness_with_neighbor();
    harness.run();

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    assert!(harness.state().open);

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    assert!(!harness.state().open);
    assert!(harness.query_by_label("15").is_none());
    assert!(has_focus(&harness));
    assert_eq!(harness.state().value, Some(date(2024, 1, 10)));
}

#[test]
fn clicking_elsewhere_closes() {
    let mut harness = harness_with_neighbor();
    harness.run();

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    assert!(harness.state().open);

    harness.get_by_label("Elsewhere").click();
    harness.run();
    assert!(!harness.state().open);
    assert!(harness.query_by_label("15").is_none());
    assert_eq!(harness.state().value, Some(date(2024, 1, 10)));
}

#[test]
fn clearing_keeps_the_calendar_open_and_focused() {
    let mut harness = harness_with_neighbor();
    harness.run();

    harness.get_by_label(Icon::CALENDAR).click();
    harness.run();
    assert!(harness.state().open);

    harness.get_by_label(CLEAR_GLYPH).click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.value, None);
    assert!(state.open);
    assert_eq!((state.focus_count, state.blur_count), (1, 0));
    assert!(has_focus(&harness));
}

#[test]
fn custom_suffix_icon() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint")
                .suffix_icon(Icon::new("🗓").hover_text("Pick a sprint"))
                .today(today());
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();
    assert!(harness.query_by_label(Icon::CALENDAR).is_none());

    harness.get_by_label("🗓").click();
    harness.run();
    assert!(harness.state().open);
}

#[test]
fn date_render_fills_the_grid() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint")
                .default_open(true)
                .today(today())
                .date_render(|date: NaiveDate| WidgetText::from(format!("<{}>", date.day())));
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();
    assert!(harness.query_by_label("15").is_none());

    harness.get_by_label("<15>").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.value, Some(date(2024, 1, 15)));
    assert_eq!(state.formatted, "2024-3rd");
}

#[test]
fn earliest_date_can_be_shown() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            let picker = WeekPicker::new("sprint")
                .value(Some(NaiveDate::MIN))
                .default_open(true)
                .today(today());
            state.show(ui, picker);
        },
        State::default(),
    );
    harness.run();

    let state = harness.state();
    assert_eq!(state.value, Some(NaiveDate::MIN));
    assert!(state.open);
    assert!(!state.formatted.is_empty());
}
