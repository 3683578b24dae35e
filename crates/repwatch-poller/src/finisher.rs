//! One-shot end-of-session report fetch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::{info, warn};

use repwatch_core::{ClientError, FinishReport, StatusSource};

use crate::observer::PollObserver;

/// Fetches the final report once per user action.
///
/// No guard against re-entry: every call issues its own request and the
/// last outcome to reach the renderer is the one displayed.
pub struct SessionFinisher {
    source: Arc<dyn StatusSource>,
    observer: Arc<dyn PollObserver>,
    requested: Arc<AtomicU64>,
}

impl SessionFinisher {
    #[must_use]
    pub fn new(source: Arc<dyn StatusSource>, observer: Arc<dyn PollObserver>) -> Self {
        Self {
            source,
            observer,
            requested: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of finish requests made so far.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested.load(Ordering::Acquire)
    }

    /// Fetch the report on a background thread and hand the outcome to the
    /// observer.
    pub fn request(&self) {
        let n = self.requested.fetch_add(1, Ordering::AcqRel) + 1;
        info!(request = n, "finishing workout");

        let source = Arc::clone(&self.source);
        let observer = Arc::clone(&self.observer);
        let spawned = thread::Builder::new()
            .name(format!("finish-workout-{n}"))
            .spawn(move || observer.on_report(source.fetch_report()));

        if let Err(e) = spawned {
            warn!(error = %e, "could not spawn finish request");
            self.observer
                .on_report(Err(ClientError::Worker(e.to_string())));
        }
    }

    /// Fetch the report on the calling thread.
    pub fn finish_blocking(&self) -> Result<FinishReport, ClientError> {
        let n = self.requested.fetch_add(1, Ordering::AcqRel) + 1;
        info!(request = n, "finishing workout");
        self.source.fetch_report()
    }
}
