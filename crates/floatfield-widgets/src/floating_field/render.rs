//! Pure mapping from [`FieldState`] to what the field displays.

use ratatui::style::{Color, Style};

use super::appearance::Appearance;
use super::sink::ViewSink;
use super::state::FieldState;

/// Which of the two label fonts to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFont {
    /// Label sits in the text row.
    Large,
    /// Label floats above the text.
    Small,
}

/// Which underline color to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    /// No commit has been validated yet.
    Normal,
    /// The last commit failed validation.
    Error,
    /// The last commit passed validation.
    Valid,
}

/// Everything a view sink needs for one paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub label: String,
    pub label_font: LabelFont,
    pub field_text: String,
    pub field_visible: bool,
    pub clear_visible: bool,
    pub underline: Underline,
}

/// Compute the plan for `state`.
///
/// Visibility depends only on emptiness and focus; the underline only on
/// `validity`.  The three visibility outcomes are exhaustive over
/// (empty, active).
pub fn render(state: &FieldState) -> RenderPlan {
    let (label_font, field_visible, clear_visible) =
        match (state.typed_text.is_empty(), state.is_active) {
            (false, _) => (LabelFont::Small, true, true),
            (true, true) => (LabelFont::Small, true, false),
            (true, false) => (LabelFont::Large, false, false),
        };

    let underline = match state.validity {
        None => Underline::Normal,
        Some(true) => Underline::Valid,
        Some(false) => Underline::Error,
    };

    RenderPlan {
        label: state.title.clone(),
        label_font,
        field_text: state.typed_text.clone(),
        field_visible,
        clear_visible,
        underline,
    }
}

impl RenderPlan {
    /// Push the whole plan into a sink.
    pub fn apply_to<S: ViewSink + ?Sized>(&self, sink: &mut S) {
        sink.set_label_text(&self.label);
        sink.set_label_font(self.label_font);
        sink.set_field_text(&self.field_text);
        sink.set_field_visible(self.field_visible);
        sink.set_clear_visible(self.clear_visible);
        sink.set_underline(self.underline);
    }

    /// Resolved label style: the selected font in the label color.
    pub fn label_style(&self, appearance: &Appearance) -> Style {
        label_style(self.label_font, appearance)
    }

    /// Resolved underline color.
    pub fn underline_color(&self, appearance: &Appearance) -> Color {
        underline_color(self.underline, appearance)
    }
}

pub(crate) fn label_style(font: LabelFont, appearance: &Appearance) -> Style {
    let font_style = match font {
        LabelFont::Large => appearance.label_large_font,
        LabelFont::Small => appearance.label_small_font,
    };
    font_style.fg(appearance.label_color)
}

pub(crate) fn underline_color(underline: Underline, appearance: &Appearance) -> Color {
    match underline {
        Underline::Normal => appearance.normal_underline,
        Underline::Error => appearance.error_underline,
        Underline::Valid => appearance.valid_underline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(text: &str, active: bool, validity: Option<bool>) -> FieldState {
        FieldState {
            title: "Email".into(),
            typed_text: text.into(),
            validity,
            is_active: active,
        }
    }

    #[test]
    fn idle_empty_field_shows_large_label_only() {
        let plan = render(&FieldState::new("Email"));
        assert_eq!(
            plan,
            RenderPlan {
                label: "Email".into(),
                label_font: LabelFont::Large,
                field_text: String::new(),
                field_visible: false,
                clear_visible: false,
                underline: Underline::Normal,
            }
        );
    }

    #[test]
    fn text_shows_field_and_clear_regardless_of_focus() {
        for active in [false, true] {
            let plan = render(&state("a", active, None));
            assert_eq!(plan.label_font, LabelFont::Small);
            assert!(plan.field_visible);
            assert!(plan.clear_visible);
            assert_eq!(plan.field_text, "a");
        }
    }

    #[test]
    fn focused_empty_field_floats_label_without_clear() {
        let plan = render(&state("", true, None));
        assert_eq!(plan.label_font, LabelFont::Small);
        assert!(plan.field_visible);
        assert!(!plan.clear_visible);
    }

    #[test]
    fn underline_follows_validity() {
        let cases = [
            (None, Underline::Normal),
            (Some(true), Underline::Valid),
            (Some(false), Underline::Error),
        ];
        for (validity, expected) in cases {
            for (text, active) in [("", false), ("", true), ("x", false), ("x", true)] {
                assert_eq!(render(&state(text, active, validity)).underline, expected);
            }
        }
    }

    #[test]
    fn render_is_pure() {
        let s = state("abc", true, Some(false));
        let before = s.clone();
        assert_eq!(render(&s), render(&s));
        assert_eq!(s, before);
    }

    #[test]
    fn appearance_resolves_selectors() {
        let appearance = Appearance::default();
        let plan = render(&state("", false, Some(false)));
        assert_eq!(plan.underline_color(&appearance), appearance.error_underline);
        assert_eq!(
            plan.label_style(&appearance),
            appearance.label_large_font.fg(appearance.label_color)
        );
    }
}
