//! Integration test harness for the repwatch workspace.
//!
//! The tests under `tests/` drive the poller, finisher and renderer together
//! against an in-process HTTP server.
