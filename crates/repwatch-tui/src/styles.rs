//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use repwatch_core::snapshot::feedback_type_of;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for the feedback region, selected from its class attribute.
    ///
    /// Feedback types are owned by the server; anything not listed here
    /// falls back to the normal text style.
    #[must_use]
    pub fn feedback_style(&self, class: &str) -> Style {
        match feedback_type_of(class) {
            Some("CORRETO") => Style::default()
                .fg(self.success)
                .add_modifier(Modifier::BOLD),
            Some("ATENCAO") => Style::default()
                .fg(self.warning)
                .add_modifier(Modifier::BOLD),
            Some("ERRO_CRITICO") => Style::default()
                .fg(self.error)
                .add_modifier(Modifier::BOLD),
            _ => self.text_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_feedback_types() {
        let theme = ColorTheme::default();
        assert_eq!(
            theme.feedback_style("feedback-main status-CORRETO").fg,
            Some(Color::Green)
        );
        assert_eq!(
            theme.feedback_style("feedback-main status-ATENCAO").fg,
            Some(Color::Yellow)
        );
        assert_eq!(
            theme.feedback_style("feedback-main status-ERRO_CRITICO").fg,
            Some(Color::Red)
        );
        assert_eq!(
            theme.feedback_style("feedback-main status-INFO").fg,
            Some(Color::White)
        );
    }

    #[test]
    fn unknown_feedback_type_is_neutral() {
        let theme = ColorTheme::default();
        assert_eq!(
            theme.feedback_style("feedback-main status-NEW_KIND"),
            theme.text_style()
        );
        assert_eq!(theme.feedback_style("garbage"), theme.text_style());
    }
}
