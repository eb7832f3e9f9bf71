//! Paced replay of a visit trace.

use serde::Serialize;
use tracing::{debug, warn};

use super::board::TraceSink;
use super::cancel::CancelToken;
use crate::config::AnimationConfig;
use crate::engine::Trace;
use crate::error::Result;

/// How a replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReplayOutcome {
    /// Every event was applied.
    Completed { applied: usize },
    /// The token was cancelled after `applied` events.
    Cancelled { applied: usize },
}

impl ReplayOutcome {
    pub fn applied(&self) -> usize {
        match self {
            ReplayOutcome::Completed { applied } | ReplayOutcome::Cancelled { applied } => *applied,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ReplayOutcome::Cancelled { .. })
    }
}

/// Feeds trace events to a sink, pausing after each for its scaled delay.
///
/// The token is checked before every event, and a pending pause ends early
/// when the token is cancelled.
#[derive(Debug, Clone, Default)]
pub struct Replayer {
    config: AnimationConfig,
    cancel: CancelToken,
}

impl Replayer {
    /// Create a replayer with a fresh token.
    ///
    /// Fails if the playback rate cannot scale a delay.
    pub fn new(config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancelToken::new(),
        })
    }

    /// Use an existing token instead of a fresh one.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub async fn replay<S>(&self, trace: &Trace, sink: &mut S) -> ReplayOutcome
    where
        S: TraceSink + ?Sized,
    {
        debug!(events = trace.len(), "replaying trace");

        for (applied, event) in trace.iter().enumerate() {
            if self.cancel.is_cancelled() {
                warn!(applied, total = trace.len(), "replay cancelled");
                return ReplayOutcome::Cancelled { applied };
            }

            sink.apply(event);

            let pause = self.config.scaled(event.delay_ms);
            if !pause.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(pause) => {}
                    _ = self.cancel.cancelled() => {}
                }
            }
        }

        ReplayOutcome::Completed {
            applied: trace.len(),
        }
    }

    /// Apply every event immediately, ignoring delays and cancellation.
    pub fn replay_instant<S>(trace: &Trace, sink: &mut S)
    where
        S: TraceSink + ?Sized,
    {
        for event in trace {
            sink.apply(event);
        }
    }
}
