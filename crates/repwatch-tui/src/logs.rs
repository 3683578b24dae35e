//! Diagnostics panel: bounded log lines with scroll navigation.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Maximum number of lines kept.
const MAX_LOG_LINES: usize = 500;

/// Scroll state for the log panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Follow new lines.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    fn last(total: usize) -> usize {
        total.saturating_sub(1)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, total: usize) {
        self.offset = (self.offset + lines).min(Self::last(total));
        if self.offset >= Self::last(total) {
            self.auto_scroll = true;
        }
    }

    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.auto_scroll = true;
        self.offset = Self::last(total);
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic lines shown in the dashboard.
#[derive(Debug, Clone, Default)]
pub struct LogPanel {
    lines: VecDeque<String>,
    pub scroll: LogScrollState,
}

impl LogPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, dropping the oldest past the cap.
    pub fn push(&mut self, line: String) {
        if self.lines.len() == MAX_LOG_LINES {
            self.lines.pop_front();
            self.scroll.offset = self.scroll.offset.saturating_sub(1);
        }
        self.lines.push_back(line);
        if self.scroll.auto_scroll {
            self.scroll.end(self.lines.len());
        }
    }

    #[must_use]
    pub fn lines(&self) -> &VecDeque<String> {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll.scroll_down(lines, self.lines.len());
    }

    pub fn home(&mut self) {
        self.scroll.home();
    }

    pub fn end(&mut self) {
        self.scroll.end(self.lines.len());
    }
}

fn line_style(line: &str) -> Style {
    if line.starts_with("[ERROR]") {
        Style::default().fg(Color::Red)
    } else if line.starts_with("[WARN]") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render the log panel.
///
/// The view keeps the scroll offset's line in sight, anchoring it at the
/// bottom when following.
pub fn render_logs(frame: &mut Frame, area: Rect, panel: &LogPanel) {
    let visible = area.height.saturating_sub(2) as usize;
    let total = panel.len();
    let first = if panel.scroll.auto_scroll {
        total.saturating_sub(visible)
    } else {
        panel.scroll.offset.min(total.saturating_sub(1))
    };

    let items: Vec<ListItem> = panel
        .lines()
        .iter()
        .skip(first)
        .take(visible)
        .map(|line| ListItem::new(Line::raw(line.as_str())).style(line_style(line)))
        .collect();

    let title = if total > visible {
        format!(" Diagnostics ({}/{total}) ", first + items.len())
    } else {
        " Diagnostics ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
