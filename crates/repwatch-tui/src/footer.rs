//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = vec![Line::from(vec![
        Span::styled("q", key),
        Span::raw(": quit | "),
        Span::styled("f", key),
        Span::raw(": finish workout | "),
        Span::styled("x", key),
        Span::raw(": close | "),
        Span::styled("p", key),
        Span::raw(": pause | "),
        Span::styled("r", key),
        Span::raw(": resume | "),
        Span::styled("l", key),
        Span::raw(": logs"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
