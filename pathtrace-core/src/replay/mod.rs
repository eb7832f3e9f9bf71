//! Trace Replay
//!
//! Helpers for the rendering side: a [`Replayer`] that feeds a trace to a
//! [`TraceSink`] at the configured pace, a [`CancelToken`] to stop it between
//! steps, and a [`HighlightBoard`] that tracks what a renderer should be
//! showing.
//!
//! Replay is cooperative. It runs on the caller's tokio runtime, holds no
//! locks across a pause, and can be abandoned at any suspension point
//! without affecting the computed results.

mod board;
mod cancel;
mod replayer;

pub use board::{HighlightBoard, SharedBoard, TraceSink};
pub use cancel::CancelToken;
pub use replayer::{ReplayOutcome, Replayer};
