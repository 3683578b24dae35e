//! Report modal and blocking alert overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Rect of `percent_x` by `percent_y` centered in `area`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render the workout report modal over `area`.
///
/// Each line of the report is shown as-is.
pub fn render_report_modal(frame: &mut Frame, area: Rect, report: &str) {
    let modal = centered_rect(70, 70, area);
    let mut lines: Vec<Line> = report.lines().map(Line::raw).collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "x / Enter: close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Workout report ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(Clear, modal);
    frame.render_widget(paragraph, modal);
}

/// Render a blocking alert over `area`.
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(50, 30, area);
    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "x / Enter: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Alert ")
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn content(draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(draw).unwrap();
        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn modal_shows_report_lines() {
        let text = content(|frame| {
            let area = frame.area();
            render_report_modal(frame, area, "Total reps: 12\nCritical errors: 1");
        });
        assert!(text.contains("Workout report"));
        assert!(text.contains("Total reps: 12"));
        assert!(text.contains("Critical errors: 1"));
    }

    #[test]
    fn alert_shows_message() {
        let text = content(|frame| {
            let area = frame.area();
            render_alert(frame, area, "Report generation failed.");
        });
        assert!(text.contains("Report generation failed."));
        assert!(text.contains("dismiss"));
    }
}
