//! Fixed-cadence status poller.
//!
//! A ticker thread fires every `period` and spawns one fetch thread per
//! tick, whether or not earlier fetches have finished. Each fetch is tagged
//! with a sequence number at issue time so the renderer can discard
//! superseded responses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};
use tracing::{debug, info, warn};

use repwatch_core::{ClientError, RequestSequencer, StatusSource};

use crate::observer::PollObserver;

/// Lifecycle errors of [`StatusPoller`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollerError {
    #[error("status poller is already running")]
    AlreadyRunning,

    #[error("polling period must be greater than zero")]
    InvalidPeriod,

    #[error("could not start ticker thread: {0}")]
    Spawn(String),
}

/// State shared between the poller, its ticker and the fetch threads.
struct Shared {
    source: Arc<dyn StatusSource>,
    observer: Arc<dyn PollObserver>,
    sequencer: RequestSequencer,
    in_flight: AtomicUsize,
}

impl Shared {
    /// Issue one status fetch on its own thread.
    fn issue(self: &Arc<Self>) -> u64 {
        let seq = self.sequencer.next();
        self.in_flight.fetch_add(1, Ordering::AcqRel);

        let shared = Arc::clone(self);
        let spawned = thread::Builder::new()
            .name(format!("status-fetch-{seq}"))
            .spawn(move || {
                let outcome = shared.source.fetch_status();
                shared.in_flight.fetch_sub(1, Ordering::AcqRel);
                shared.observer.on_status(seq, outcome);
            });

        if let Err(e) = spawned {
            self.in_flight.fetch_sub(1, Ordering::AcqRel);
            warn!(seq, error = %e, "could not spawn status fetch");
            self.observer
                .on_status(seq, Err(ClientError::Worker(e.to_string())));
        }
        seq
    }
}

struct Ticker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Polling lifecycle object.
///
/// Created stopped. [`start`](Self::start) begins ticking,
/// [`stop`](Self::stop) ends it, and dropping a running poller stops it.
pub struct StatusPoller {
    shared: Arc<Shared>,
    period: Duration,
    ticker: Option<Ticker>,
}

impl StatusPoller {
    /// Create a stopped poller.
    #[must_use]
    pub fn new(
        source: Arc<dyn StatusSource>,
        observer: Arc<dyn PollObserver>,
        period: Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                observer,
                sequencer: RequestSequencer::new(),
                in_flight: AtomicUsize::new(0),
            }),
            period,
            ticker: None,
        }
    }

    /// Polling period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the ticker is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Number of status requests issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.shared.sequencer.issued()
    }

    /// Number of status requests issued but not yet completed.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.shared.in_flight.load(Ordering::Acquire)
    }

    /// Issue a single fetch right away and return its sequence number.
    pub fn poll_once(&self) -> u64 {
        self.shared.issue()
    }

    /// Start ticking. The first fetch fires one period from now.
    pub fn start(&mut self) -> Result<(), PollerError> {
        if self.ticker.is_some() {
            return Err(PollerError::AlreadyRunning);
        }
        if self.period.is_zero() {
            return Err(PollerError::InvalidPeriod);
        }

        let (stop_tx, stop_rx) = bounded::<()>(1);
        let shared = Arc::clone(&self.shared);
        let period = self.period;
        let handle = thread::Builder::new()
            .name("status-ticker".to_string())
            .spawn(move || {
                let ticks = tick(period);
                loop {
                    select! {
                        recv(ticks) -> _ => {
                            let seq = shared.issue();
                            debug!(seq, "status request issued");
                        }
                        recv(stop_rx) -> _ => break,
                    }
                }
            })
            .map_err(|e| PollerError::Spawn(e.to_string()))?;

        info!(
            period_ms = u64::try_from(self.period.as_millis()).unwrap_or(u64::MAX),
            source = %self.shared.source.describe(),
            "status polling started"
        );
        self.ticker = Some(Ticker { stop_tx, handle });
        Ok(())
    }

    /// Stop ticking and join the ticker thread.
    ///
    /// Fetches already in flight still complete and report to the observer.
    pub fn stop(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        let _ = ticker.stop_tx.send(());
        if ticker.handle.join().is_err() {
            warn!("status ticker thread panicked");
        }
        info!(issued = self.issued(), "status polling stopped");
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{ChannelObserver, NullObserver, PollEvent};
    use crate::renderer::{RenderOutcome, StatusRenderer};
    use crate::testing::{snapshot, ScriptedSource};
    use crossbeam_channel::unbounded;
    use repwatch_core::view::DisplayState;
    use std::time::Instant;

    fn ok_source() -> Arc<ScriptedSource> {
        Arc::new(ScriptedSource::new(Ok(snapshot(1, "up", "Good", "CORRETO"))))
    }

    fn wait_for(mut cond: impl FnMut() -> bool, limit: Duration) -> bool {
        let deadline = Instant::now() + limit;
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        cond()
    }

    #[test]
    fn new_poller_is_stopped() {
        let poller = StatusPoller::new(
            ok_source(),
            Arc::new(NullObserver),
            Duration::from_millis(150),
        );
        assert!(!poller.is_running());
        assert_eq!(poller.issued(), 0);
        assert_eq!(poller.in_flight(), 0);
        assert_eq!(poller.period(), Duration::from_millis(150));
    }

    #[test]
    fn zero_period_rejected() {
        let mut poller = StatusPoller::new(ok_source(), Arc::new(NullObserver), Duration::ZERO);
        assert_eq!(poller.start(), Err(PollerError::InvalidPeriod));
        assert!(!poller.is_running());
    }

    #[test]
    fn double_start_rejected() {
        let mut poller =
            StatusPoller::new(ok_source(), Arc::new(NullObserver), Duration::from_millis(20));
        poller.start().unwrap();
        assert_eq!(poller.start(), Err(PollerError::AlreadyRunning));
        poller.stop();
        assert!(!poller.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut poller =
            StatusPoller::new(ok_source(), Arc::new(NullObserver), Duration::from_millis(20));
        poller.stop();
        poller.start().unwrap();
        poller.stop();
        poller.stop();
    }

    #[test]
    fn ticks_keep_firing() {
        let source = ok_source();
        let (tx, rx) = unbounded();
        let mut poller = StatusPoller::new(
            source.clone(),
            Arc::new(ChannelObserver::new(tx)),
            Duration::from_millis(10),
        );
        poller.start().unwrap();
        let mut received = 0;
        while received < 5 {
            let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert!(matches!(event, PollEvent::Status { outcome: Ok(_), .. }));
            received += 1;
        }
        poller.stop();
        assert!(source.status_calls() >= 5);
    }

    #[test]
    fn failures_do_not_stop_ticking() {
        let source = Arc::new(ScriptedSource::new(Err(ClientError::Transport(
            "connection refused".into(),
        ))));
        let (tx, rx) = unbounded();
        let mut poller = StatusPoller::new(
            source,
            Arc::new(ChannelObserver::new(tx)),
            Duration::from_millis(10),
        );
        poller.start().unwrap();
        let mut view = DisplayState::new();
        let mut renderer = StatusRenderer::new();
        for _ in 0..4 {
            let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert_eq!(renderer.apply(&mut view, event), RenderOutcome::Failed);
        }
        poller.stop();
        assert_eq!(view.reps, "0");
        assert_eq!(view.phase, "INICIANDO");
    }

    #[test]
    fn requests_overlap_and_stale_response_is_discarded() {
        let source = ok_source();
        // Request 1 is slow, request 2 is fast.
        source.push_status(
            Duration::from_millis(200),
            Ok(snapshot(4, "down", "old", "ATENCAO")),
        );
        source.push_status(Duration::ZERO, Ok(snapshot(5, "up", "new", "CORRETO")));

        let (tx, rx) = unbounded();
        let poller = StatusPoller::new(
            source,
            Arc::new(ChannelObserver::new(tx)),
            Duration::from_millis(150),
        );
        let first = poller.poll_once();
        // Let the first fetch claim the slow script entry.
        assert!(wait_for(|| poller.in_flight() == 1, Duration::from_secs(1)));
        thread::sleep(Duration::from_millis(20));
        let second = poller.poll_once();
        assert!(second > first);

        let mut view = DisplayState::new();
        let mut renderer = StatusRenderer::new();
        let e1 = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let e2 = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(e1, PollEvent::Status { seq, .. } if seq == second));
        assert_eq!(renderer.apply(&mut view, e1), RenderOutcome::Applied);
        assert_eq!(renderer.apply(&mut view, e2), RenderOutcome::Stale);
        assert_eq!(view.reps, "5");
        assert_eq!(view.feedback, "new");
    }

    #[test]
    fn restart_keeps_sequence_monotonic() {
        let (tx, rx) = unbounded();
        let mut poller = StatusPoller::new(
            ok_source(),
            Arc::new(ChannelObserver::new(tx)),
            Duration::from_millis(10),
        );
        poller.start().unwrap();
        rx.recv_timeout(Duration::from_secs(2)).unwrap();
        poller.stop();
        let before = poller.issued();
        assert!(before >= 1);

        poller.start().unwrap();
        assert!(wait_for(|| poller.issued() > before, Duration::from_secs(2)));
        poller.stop();
    }

    #[test]
    fn stopped_poller_issues_nothing() {
        let source = ok_source();
        let mut poller = StatusPoller::new(
            source.clone(),
            Arc::new(NullObserver),
            Duration::from_millis(10),
        );
        poller.start().unwrap();
        assert!(wait_for(|| poller.issued() >= 2, Duration::from_secs(2)));
        poller.stop();
        let issued = poller.issued();
        thread::sleep(Duration::from_millis(60));
        assert_eq!(poller.issued(), issued);
    }

    #[test]
    fn drop_stops_ticker() {
        let source = ok_source();
        {
            let mut poller = StatusPoller::new(
                source.clone(),
                Arc::new(NullObserver),
                Duration::from_millis(10),
            );
            poller.start().unwrap();
            assert!(wait_for(|| source.status_calls() >= 1, Duration::from_secs(2)));
        }
        // Let fetches spawned before the drop reach the source.
        thread::sleep(Duration::from_millis(20));
        let calls = source.status_calls();
        thread::sleep(Duration::from_millis(60));
        assert_eq!(source.status_calls(), calls);
    }
}
