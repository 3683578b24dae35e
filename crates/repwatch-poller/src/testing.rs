//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use repwatch_core::{ClientError, FinishReport, StatusSnapshot, StatusSource};

pub(crate) fn snapshot(reps: u64, phase: &str, feedback: &str, kind: &str) -> StatusSnapshot {
    StatusSnapshot {
        reps,
        phase: phase.to_string(),
        feedback: feedback.to_string(),
        feedback_type: kind.to_string(),
    }
}

/// Source that replays scripted outcomes, each after its own delay.
pub(crate) struct ScriptedSource {
    status: Mutex<VecDeque<(Duration, Result<StatusSnapshot, ClientError>)>>,
    fallback: Result<StatusSnapshot, ClientError>,
    reports: Mutex<VecDeque<Result<FinishReport, ClientError>>>,
    status_calls: AtomicUsize,
    report_calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new(fallback: Result<StatusSnapshot, ClientError>) -> Self {
        Self {
            status: Mutex::new(VecDeque::new()),
            fallback,
            reports: Mutex::new(VecDeque::new()),
            status_calls: AtomicUsize::new(0),
            report_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn push_status(
        &self,
        delay: Duration,
        outcome: Result<StatusSnapshot, ClientError>,
    ) {
        self.status.lock().push_back((delay, outcome));
    }

    pub(crate) fn push_report(&self, outcome: Result<FinishReport, ClientError>) {
        self.reports.lock().push_back(outcome);
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn report_calls(&self) -> usize {
        self.report_calls.load(Ordering::SeqCst)
    }
}

impl StatusSource for ScriptedSource {
    fn fetch_status(&self) -> Result<StatusSnapshot, ClientError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.status.lock().pop_front();
        match next {
            Some((delay, outcome)) => {
                thread::sleep(delay);
                outcome
            }
            None => self.fallback.clone(),
        }
    }

    fn fetch_report(&self) -> Result<FinishReport, ClientError> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        self.reports
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted report".into())))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
