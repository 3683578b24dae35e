//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossbeam_channel::RecvTimeoutError;
use tracing::{debug, info};

use repwatch_cli::output::{format_summary, write_report};
use repwatch_cli::ui::{print_error, print_header};
use repwatch_cli::CliStatusView;
use repwatch_core::{CancellationToken, HttpStatusSource, HttpTimeouts, REPORT_FAILED_ALERT};
use repwatch_poller::{
    ChannelObserver, NullObserver, PollEvent, PollObserver, SessionFinisher, StatusPoller,
    StatusRenderer,
};

use crate::config::{AppConfig, Settings};
use crate::errors::AppError;

/// How often the watch loop checks for Ctrl+C while idle.
const CANCEL_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        repwatch_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let settings = config.settings()?;
    let source = Arc::new(HttpStatusSource::new(
        &settings.server,
        HttpTimeouts::with_overall(settings.timeout),
    )?);

    if config.finish {
        return run_finish(config, source);
    }

    if config.tui {
        return run_tui(&settings, source);
    }

    run_watch(config, &settings, source)
}

fn run_finish(config: &AppConfig, source: Arc<HttpStatusSource>) -> Result<()> {
    let finisher = SessionFinisher::new(source, Arc::new(NullObserver));
    let report = match finisher.finish_blocking() {
        Ok(report) => report,
        Err(e) => {
            print_error(REPORT_FAILED_ALERT);
            return Err(e.into());
        }
    };

    if !config.quiet {
        print_header("Workout report");
    }
    println!("{}", report.report);

    if let Some(path) = &config.output {
        write_report(path, &report.report)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }
    Ok(())
}

fn run_watch(
    config: &AppConfig,
    settings: &Settings,
    source: Arc<HttpStatusSource>,
) -> Result<()> {
    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let (tx, rx) = crossbeam_channel::unbounded::<PollEvent>();
    let observer: Arc<dyn PollObserver> = Arc::new(ChannelObserver::new(tx));
    let mut poller = StatusPoller::new(source.clone(), Arc::clone(&observer), settings.interval);
    let finisher = SessionFinisher::new(source, observer);

    let mut view = CliStatusView::new(config.quiet);
    let mut renderer = StatusRenderer::new();
    let started = Instant::now();
    let mut outcomes = 0u64;

    poller.start()?;
    info!(server = %settings.server, "watching");

    while !cancel.is_cancelled() {
        match rx.recv_timeout(CANCEL_CHECK_INTERVAL) {
            Ok(event) => {
                let is_status = matches!(event, PollEvent::Status { .. });
                renderer.apply(&mut view, event);
                if is_status {
                    outcomes += 1;
                    if config.max_ticks > 0 && outcomes >= config.max_ticks {
                        debug!(outcomes, "tick limit reached");
                        break;
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    poller.stop();

    if config.report_on_exit {
        renderer.apply_report(&mut view, finisher.finish_blocking());
    }

    if !config.quiet {
        eprintln!("{}", format_summary(started.elapsed(), &renderer.stats()));
    }

    if cancel.is_cancelled() {
        return Err(AppError::Cancelled.into());
    }
    Ok(())
}

fn run_tui(settings: &Settings, source: Arc<HttpStatusSource>) -> Result<()> {
    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<repwatch_tui::TuiMessage>();
    let observer: Arc<dyn PollObserver> =
        Arc::new(repwatch_tui::TuiBridgeObserver::new(tx.clone()));

    let mut poller = StatusPoller::new(source.clone(), Arc::clone(&observer), settings.interval);
    poller.start()?;
    let finisher = SessionFinisher::new(source, observer);

    let mut app = repwatch_tui::TuiApp::new(rx);
    app.set_server(&settings.server);
    app.attach(poller, finisher);
    let _ = tx.send(repwatch_tui::TuiMessage::Log(format!(
        "Polling {} every {:?}",
        settings.server, settings.interval
    )));

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("setting Ctrl+C handler")
}
