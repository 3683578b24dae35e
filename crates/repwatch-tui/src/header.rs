//! TUI header panel.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use repwatch_poller::RenderStats;

/// What the header shows about the feed.
pub struct HeaderInfo<'a> {
    pub server: &'a str,
    pub period_ms: u64,
    pub paused: bool,
    pub in_flight: usize,
    pub stats: RenderStats,
    /// Time since the last applied snapshot; `None` before the first one.
    pub since_update: Option<Duration>,
}

fn freshness(since_update: Option<Duration>) -> String {
    match since_update {
        Some(age) => format!("updated {:.1}s ago", age.as_secs_f64()),
        None => "waiting for data".to_string(),
    }
}

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, info: &HeaderInfo<'_>) {
    let (state, state_style) = if info.paused {
        ("PAUSED", Style::default().fg(Color::Yellow))
    } else {
        ("LIVE", Style::default().fg(Color::Green))
    };
    let text = vec![Line::from(vec![
        Span::styled("repwatch", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" | {} every {}ms | ", info.server, info.period_ms)),
        Span::styled(state, state_style),
        Span::raw(format!(
            " | {} | in flight {} | applied {} stale {} failed {}",
            freshness(info.since_update),
            info.in_flight,
            info.stats.applied,
            info.stats.stale,
            info.stats.failed
        )),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" repwatch ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
