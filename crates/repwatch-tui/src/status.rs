//! Rep count, phase and feedback regions.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use repwatch_core::view::DisplayState;

use crate::styles::ColorTheme;

/// Render the status regions: counters on the left, feedback on the right.
pub fn render_status(frame: &mut Frame, area: Rect, display: &DisplayState, theme: &ColorTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let counters = vec![
        Line::from(Span::styled("REPS", theme.muted_style())),
        Line::from(Span::styled(
            display.reps.as_str(),
            theme.header_style().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled("PHASE", theme.muted_style())),
        Line::from(Span::styled(display.phase.as_str(), theme.text_style())),
    ];
    let counters = Paragraph::new(counters)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Session ")
                .border_style(theme.border_style()),
        );
    frame.render_widget(counters, columns[0]);

    let style = theme.feedback_style(&display.feedback_class);
    let feedback = Paragraph::new(Line::from(Span::styled(display.feedback.as_str(), style)))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Posture ")
                .border_style(style),
        );
    frame.render_widget(feedback, columns[1]);
}
