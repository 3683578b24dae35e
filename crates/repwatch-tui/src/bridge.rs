//! Bridge between fetch outcomes and TUI messages.

use crossbeam_channel::Sender;

use repwatch_core::{ClientError, FinishReport, StatusSnapshot};
use repwatch_poller::PollObserver;

use crate::messages::TuiMessage;

/// Poll observer that forwards outcomes to the TUI channel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl PollObserver for TuiBridgeObserver {
    fn on_status(&self, seq: u64, outcome: Result<StatusSnapshot, ClientError>) {
        let _ = self.tx.try_send(TuiMessage::Status { seq, outcome });
    }

    fn on_report(&self, outcome: Result<FinishReport, ClientError>) {
        let _ = self.tx.try_send(TuiMessage::Report { outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn forwards_status() {
        let (tx, rx) = unbounded();
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_status(9, Err(ClientError::Decode("eof".into())));
        assert!(matches!(
            rx.try_recv().unwrap(),
            TuiMessage::Status { seq: 9, outcome: Err(_) }
        ));
    }

    #[test]
    fn forwards_report() {
        let (tx, rx) = unbounded();
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_report(Ok(FinishReport {
            report: "Total reps: 1".into(),
        }));
        assert!(matches!(
            rx.try_recv().unwrap(),
            TuiMessage::Report { outcome: Ok(_) }
        ));
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = unbounded();
        drop(rx);
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_status(1, Err(ClientError::Decode("eof".into())));
    }
}
