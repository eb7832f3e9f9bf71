//! Engine and Run Lifecycle
//!
//! [`ShortestPathEngine::start`] hands out at most one [`Run`] at a time.
//! The run holds a [`RunGuard`] for as long as it lives, so a second start
//! while an animation is still being replayed fails with [`Error::Busy`]
//! instead of interleaving two traces on the same surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::dijkstra::{compute_shortest_paths, ShortestPaths};
use crate::config::AnimationConfig;
use crate::error::{Error, Result};
use crate::graph::{GraphStore, NodeId};
use crate::replay::{CancelToken, ReplayOutcome, Replayer, TraceSink};

/// Computes shortest paths and enforces one run in flight.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    config: AnimationConfig,

    /// Set while a [`Run`] is alive.
    running: Arc<AtomicBool>,
}

impl ShortestPathEngine {
    /// Create an engine with the given pacing.
    pub fn new(config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Compute without claiming the engine.
    pub fn compute(&self, graph: &GraphStore, source: &NodeId) -> Result<ShortestPaths> {
        Ok(compute_shortest_paths(graph, source, &self.config)?)
    }

    /// Claim the engine and compute a run for replay.
    ///
    /// The claim is released when the returned [`Run`] is dropped, or right
    /// away if the computation fails.
    pub fn start(&self, graph: &GraphStore, source: &NodeId) -> Result<Run> {
        let guard = RunGuard::acquire(&self.running)?;
        let paths = self.compute(graph, source)?;
        let replayer = Replayer::new(self.config.clone())?;
        debug!(source = %source, "run started");
        Ok(Run {
            paths,
            replayer,
            _guard: guard,
        })
    }

    /// Whether a run is currently alive.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Exclusive claim on an engine. Releases the claim on drop.
#[derive(Debug)]
pub struct RunGuard {
    running: Arc<AtomicBool>,
}

impl RunGuard {
    fn acquire(running: &Arc<AtomicBool>) -> Result<Self> {
        running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| Error::Busy)?;
        Ok(Self {
            running: Arc::clone(running),
        })
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        debug!("run released");
    }
}

/// A computed run waiting to be replayed.
#[derive(Debug)]
pub struct Run {
    paths: ShortestPaths,
    replayer: Replayer,
    _guard: RunGuard,
}

impl Run {
    pub fn paths(&self) -> &ShortestPaths {
        &self.paths
    }

    /// Token that aborts this run's replay. Clone it before replaying to
    /// cancel from another task.
    pub fn cancel_token(&self) -> CancelToken {
        self.replayer.cancel_token()
    }

    /// Replay the trace into `sink`, pausing between events.
    pub async fn replay<S>(&self, sink: &mut S) -> ReplayOutcome
    where
        S: TraceSink + ?Sized,
    {
        self.replayer.replay(self.paths.trace(), sink).await
    }

    /// Release the engine and keep the results.
    pub fn finish(self) -> ShortestPaths {
        self.paths
    }
}
