//! repwatch: live client for an exercise repetition tracker.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use repwatch_cli::ui::print_error;
use repwatch_core::constants::exit_codes;
use repwatch_lib::config::AppConfig;
use repwatch_lib::{app, errors, version};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

fn main() {
    // Parse CLI args; help and version go through clap's own exit path
    let config = match AppConfig::try_parse() {
        Ok(config) => config,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_codes::ERROR_CONFIG);
        }
    };

    if let Err(e) = init_tracing(&config) {
        print_error(&format!("{e:#}"));
        std::process::exit(exit_codes::ERROR_CONFIG);
    }
    tracing::debug!(version = %version::full_version(), "starting");

    if let Err(e) = app::run(&config) {
        print_error(&format!("{e:#}"));
        std::process::exit(errors::exit_code(&e));
    }
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    // The dashboard owns the terminal, so TUI diagnostics go to a file or nowhere
    let (writer, ansi) = match (&config.log_file, config.tui) {
        (Some(path), _) => (BoxMakeWriter::new(Mutex::new(open_log(path)?)), false),
        (None, true) => (BoxMakeWriter::new(io::sink), false),
        (None, false) => (BoxMakeWriter::new(io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .init();
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("opening log file {}", path.display()))
}
