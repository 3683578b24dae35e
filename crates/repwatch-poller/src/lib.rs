//! # repwatch-poller
//!
//! Drives the status feed and the finish handshake.
//! Fetches run on background threads and report to a [`PollObserver`];
//! the rendering thread feeds those outcomes through a [`StatusRenderer`].

pub mod finisher;
pub mod observer;
pub mod poller;
pub mod renderer;

#[cfg(test)]
pub(crate) mod testing;

pub use finisher::SessionFinisher;
pub use observer::{ChannelObserver, NullObserver, PollEvent, PollObserver};
pub use poller::{PollerError, StatusPoller};
pub use renderer::{RenderOutcome, RenderStats, StatusRenderer};
