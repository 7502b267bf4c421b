use egui::{Color32, RichText, Visuals};

/// Styling of a picker glyph. Unset fields are filled in from the picker's own style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconStyle {
    pub color: Option<Color32>,
    pub size: Option<f32>,
    pub hover_text: Option<String>,
}

impl IconStyle {
    /// The style the picker gives its glyphs.
    pub fn picker(visuals: &Visuals) -> Self {
        Self {
            color: Some(visuals.weak_text_color()),
            size: None,
            hover_text: None,
        }
    }

    /// `self`, with the fields it leaves unset taken from `base`.
    #[must_use]
    pub fn merged(self, base: &Self) -> Self {
        Self {
            color: self.color.or(base.color),
            size: self.size.or(base.size),
            hover_text: self.hover_text.or_else(|| base.hover_text.clone()),
        }
    }
}

/// A glyph shown after the text of a [`crate::WeekPicker`].
///
/// ```
/// use egui_weekpicker::Icon;
///
/// let icon = Icon::new("🗓").color(egui::Color32::LIGHT_BLUE).hover_text("Pick a sprint");
/// assert_eq!(icon.glyph(), "🗓");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    glyph: String,
    style: IconStyle,
}

impl Default for Icon {
    fn default() -> Self {
        Self::calendar()
    }
}

impl Icon {
    pub const CALENDAR: &'static str = "📆";

    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            style: IconStyle::default(),
        }
    }

    /// The default suffix glyph.
    pub fn calendar() -> Self {
        Self::new(Self::CALENDAR)
    }

    #[inline]
    pub fn color(mut self, color: impl Into<Color32>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    #[inline]
    pub fn size(mut self, size: f32) -> Self {
        self.style.size = Some(size);
        self
    }

    #[inline]
    pub fn hover_text(mut self, hover_text: impl Into<String>) -> Self {
        self.style.hover_text = Some(hover_text.into());
        self
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Apply the picker's style to the fields this icon doesn't set itself.
    #[must_use]
    pub fn merged(self, base: &IconStyle) -> Self {
        Self {
            glyph: self.glyph,
            style: self.style.merged(base),
        }
    }

    pub fn rich_text(&self) -> RichText {
        let mut text = RichText::new(&self.glyph);
        if let Some(color) = self.style.color {
            text = text.color(color);
        }
        if let Some(size) = self.style.size {
            text = text.size(size);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_style_wins() {
        let base = IconStyle {
            color: Some(Color32::GRAY),
            size: Some(12.0),
            hover_text: Some("Open calendar".to_owned()),
        };
        let icon = Icon::new("⏷").color(Color32::RED).merged(&base);
        assert_eq!(icon.glyph(), "⏷");
        assert_eq!(
            icon.style(),
            &IconStyle {
                color: Some(Color32::RED),
                size: Some(12.0),
                hover_text: Some("Open calendar".to_owned()),
            }
        );
    }

    #[test]
    fn default_icon_gets_picker_style() {
        let visuals = Visuals::dark();
        let icon = Icon::default().merged(&IconStyle::picker(&visuals));
        assert_eq!(icon.glyph(), Icon::CALENDAR);
        assert_eq!(icon.style().color, Some(visuals.weak_text_color()));
        assert_eq!(icon.rich_text().text(), Icon::CALENDAR);
    }
}
