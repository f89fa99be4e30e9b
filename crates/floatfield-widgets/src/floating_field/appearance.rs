//! Colors and fonts for a floating field.
//!
//! [`Appearance`] is a plain `Copy` value; swapping it repaints the field
//! without touching its state.

use ratatui::style::{Color, Modifier, Style};

/// Colors and fonts of a floating field.
///
/// A value object: replacing it re-renders the field in full.  Fonts are
/// terminal text styles (modifier sets); their colors are overridden by
/// `label_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// Color of the label in both sizes.
    pub label_color: Color,
    /// Label style while it sits in the text row (idle and empty).
    pub label_large_font: Style,
    /// Label style while it floats above the text.
    pub label_small_font: Style,
    /// Color of the typed text.
    pub text_color: Color,
    /// Color of the caret.
    pub caret_color: Color,
    /// Underline before any commit.
    pub normal_underline: Color,
    /// Underline after a failed commit.
    pub error_underline: Color,
    /// Underline after a passing commit.
    pub valid_underline: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            label_color: Color::Gray,
            label_large_font: Style::new().add_modifier(Modifier::BOLD),
            label_small_font: Style::new().add_modifier(Modifier::DIM),
            text_color: Color::White,
            caret_color: Color::Blue,
            normal_underline: Color::DarkGray,
            error_underline: Color::LightRed,
            valid_underline: Color::Green,
        }
    }
}

impl Appearance {
    /// Set the label color.
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Set the large and small label fonts.
    pub fn with_label_fonts(mut self, large: Style, small: Style) -> Self {
        self.label_large_font = large;
        self.label_small_font = small;
        self
    }

    /// Set the typed-text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the caret color.
    pub fn with_caret_color(mut self, color: Color) -> Self {
        self.caret_color = color;
        self
    }

    /// Set the normal, error and valid underline colors.
    pub fn with_underlines(mut self, normal: Color, error: Color, valid: Color) -> Self {
        self.normal_underline = normal;
        self.error_underline = error;
        self.valid_underline = valid;
        self
    }

    /// Style for the typed text.
    pub fn text_style(&self) -> Style {
        Style::new().fg(self.text_color)
    }

    /// Style for the caret cell.
    pub fn caret_style(&self) -> Style {
        Style::new().bg(self.caret_color).fg(self.text_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_replace_only_their_fields() {
        let base = Appearance::default();
        let custom = base
            .with_caret_color(Color::Magenta)
            .with_underlines(Color::Gray, Color::Red, Color::Cyan);
        assert_eq!(custom.caret_color, Color::Magenta);
        assert_eq!(custom.error_underline, Color::Red);
        assert_eq!(custom.valid_underline, Color::Cyan);
        assert_eq!(custom.label_color, base.label_color);
        assert_eq!(custom.label_large_font, base.label_large_font);
    }

    #[test]
    fn default_underlines_are_distinct() {
        let a = Appearance::default();
        assert_ne!(a.normal_underline, a.error_underline);
        assert_ne!(a.error_underline, a.valid_underline);
        assert_ne!(a.normal_underline, a.valid_underline);
    }
}
