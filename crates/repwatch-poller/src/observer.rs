//! Delivery of fetch outcomes to the rendering thread.

use crossbeam_channel::Sender;

use repwatch_core::{ClientError, FinishReport, StatusSnapshot};

/// Outcome of one background fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// A status request tagged with its issue sequence number completed.
    Status {
        seq: u64,
        outcome: Result<StatusSnapshot, ClientError>,
    },
    /// A finish request completed.
    Report {
        outcome: Result<FinishReport, ClientError>,
    },
}

/// Receives fetch outcomes. Called from fetch threads.
pub trait PollObserver: Send + Sync {
    /// A status request completed.
    fn on_status(&self, seq: u64, outcome: Result<StatusSnapshot, ClientError>);

    /// A finish request completed.
    fn on_report(&self, outcome: Result<FinishReport, ClientError>);
}

/// Observer that forwards outcomes over a crossbeam channel.
pub struct ChannelObserver {
    tx: Sender<PollEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(tx: Sender<PollEvent>) -> Self {
        Self { tx }
    }
}

impl PollObserver for ChannelObserver {
    fn on_status(&self, seq: u64, outcome: Result<StatusSnapshot, ClientError>) {
        let _ = self.tx.try_send(PollEvent::Status { seq, outcome });
    }

    fn on_report(&self, outcome: Result<FinishReport, ClientError>) {
        let _ = self.tx.try_send(PollEvent::Report { outcome });
    }
}

/// Observer that drops everything.
pub struct NullObserver;

impl PollObserver for NullObserver {
    fn on_status(&self, _seq: u64, _outcome: Result<StatusSnapshot, ClientError>) {}
    fn on_report(&self, _outcome: Result<FinishReport, ClientError>) {}
}
