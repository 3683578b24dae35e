//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::info;

use repwatch_core::view::DisplayState;
use repwatch_poller::{RenderOutcome, SessionFinisher, StatusPoller, StatusRenderer};

use crate::footer::render_footer;
use crate::header::{render_header, HeaderInfo};
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogPanel};
use crate::messages::TuiMessage;
use crate::report::{render_alert, render_report_modal};
use crate::status::render_status;
use crate::styles::ColorTheme;

/// Redraw cadence; kept well under the polling period.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Lines scrolled by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether polling is paused.
    pub paused: bool,
    /// Display regions driven by the renderer.
    pub display: DisplayState,
    /// Diagnostics panel.
    pub logs: LogPanel,
    /// Show diagnostics toggle.
    pub show_logs: bool,
    /// Server shown in the header.
    pub server: String,
    /// Time of the last applied snapshot.
    pub last_update: Option<Instant>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    renderer: StatusRenderer,
    rx: Receiver<TuiMessage>,
    poller: Option<StatusPoller>,
    finisher: Option<SessionFinisher>,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>) -> Self {
        Self {
            should_quit: false,
            paused: false,
            display: DisplayState::new(),
            logs: LogPanel::new(),
            show_logs: true,
            server: String::new(),
            last_update: None,
            terminal_width: 80,
            terminal_height: 24,
            renderer: StatusRenderer::new(),
            rx,
            poller: None,
            finisher: None,
            theme: ColorTheme::default(),
        }
    }

    /// Hand the app the poller and finisher it controls.
    ///
    /// The poller is expected to be running already.
    pub fn attach(&mut self, poller: StatusPoller, finisher: SessionFinisher) {
        self.paused = !poller.is_running();
        self.poller = Some(poller);
        self.finisher = Some(finisher);
    }

    /// Set the server shown in the header.
    pub fn set_server(&mut self, server: &str) {
        server.clone_into(&mut self.server);
    }

    /// Renderer counters.
    #[must_use]
    pub fn renderer(&self) -> &StatusRenderer {
        &self.renderer
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Status { seq, outcome } => {
                let applied = self.renderer.apply_status(&mut self.display, seq, outcome);
                if applied == RenderOutcome::Applied {
                    self.last_update = Some(Instant::now());
                }
                self.drain_diagnostics();
            }
            TuiMessage::Report { outcome } => {
                let shown = self.renderer.apply_report(&mut self.display, outcome);
                if shown == RenderOutcome::Applied {
                    self.logs.push("Workout report received".to_string());
                }
                self.drain_diagnostics();
            }
            TuiMessage::Log(line) => {
                self.logs.push(line);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Error(err) => {
                self.logs.push(format!("[ERROR] {err}"));
            }
        }
    }

    fn drain_diagnostics(&mut self) {
        for line in self.display.take_diagnostics() {
            self.logs.push(line);
        }
    }

    /// Handle a keyboard action.
    ///
    /// While an alert is up only dismiss and quit keys act.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if self.display.alert.is_some()
            && !matches!(action, KeyAction::Dismiss | KeyAction::Quit | KeyAction::Cancel)
        {
            return;
        }
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::FinishWorkout => self.finish_workout(),
            KeyAction::Dismiss => {
                if self.display.alert.is_some() {
                    self.display.dismiss_alert();
                } else {
                    self.display.close_report();
                }
            }
            KeyAction::Pause => self.pause(),
            KeyAction::Resume => self.resume(),
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::ScrollUp => self.logs.scroll_up(1),
            KeyAction::ScrollDown => self.logs.scroll_down(1),
            KeyAction::PageUp => self.logs.scroll_up(PAGE_SIZE),
            KeyAction::PageDown => self.logs.scroll_down(PAGE_SIZE),
            KeyAction::Home => self.logs.home(),
            KeyAction::End => self.logs.end(),
            KeyAction::None => {}
        }
    }

    fn finish_workout(&mut self) {
        match &self.finisher {
            Some(finisher) => {
                finisher.request();
                self.logs.push("Finishing workout...".to_string());
            }
            None => {
                self.logs
                    .push("[WARN] no session finisher attached".to_string());
            }
        }
    }

    fn pause(&mut self) {
        if let Some(poller) = self.poller.as_mut() {
            poller.stop();
        }
        if !self.paused {
            self.logs.push("Polling paused".to_string());
        }
        self.paused = true;
    }

    fn resume(&mut self) {
        if !self.paused {
            return;
        }
        if let Some(poller) = self.poller.as_mut() {
            if let Err(e) = poller.start() {
                self.logs.push(format!("[ERROR] could not resume polling: {e}"));
                return;
            }
        }
        self.logs.push("Polling resumed".to_string());
        self.paused = false;
    }

    /// Time since the last applied snapshot.
    #[must_use]
    pub fn staleness(&self) -> Option<Duration> {
        self.last_update.map(|t| t.elapsed())
    }

    /// Compute the layout.
    ///
    /// Returns (header, status, logs, footer) rects; logs is empty when hidden.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let header = outer[0];
        let footer = outer[2];

        if !show_logs {
            let logs = Rect::new(outer[1].x, outer[1].bottom(), outer[1].width, 0);
            return (header, outer[1], logs, footer);
        }

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(60), // status regions
                Constraint::Percentage(40), // diagnostics
            ])
            .split(outer[1]);

        (header, main[0], main[1], footer)
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, status_area, logs_area, footer_area) =
            Self::compute_layout(frame.area(), self.show_logs);

        let (period_ms, in_flight) = self.poller.as_ref().map_or((0, 0), |p| {
            (
                u64::try_from(p.period().as_millis()).unwrap_or(u64::MAX),
                p.in_flight(),
            )
        });
        let info = HeaderInfo {
            server: &self.server,
            period_ms,
            paused: self.paused,
            in_flight,
            stats: self.renderer.stats(),
            since_update: self.staleness(),
        };
        render_header(frame, header_area, &info);
        render_status(frame, status_area, &self.display, &self.theme);
        if self.show_logs {
            render_logs(frame, logs_area, &self.logs);
        }
        render_footer(frame, footer_area);

        if let Some(report) = self.display.modal.report() {
            render_report_modal(frame, frame.area(), report);
        }
        if let Some(alert) = &self.display.alert {
            render_alert(frame, frame.area(), alert);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, loops over render, input and update, stops the
    /// poller and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);

        if let Some(poller) = self.poller.as_mut() {
            poller.stop();
        }
        Self::teardown_terminal(&mut terminal)?;
        info!(stats = ?self.renderer.stats(), "dashboard closed");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            // Apply any fetch outcomes that arrived meanwhile
            self.update();
        }
    }
}
