//! Animation Configuration
//!
//! Nominal pacing for the visit trace. The engine stamps each event with one
//! of these delays; only the replayer ever waits on them, so none of these
//! values affect the computed distances.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-step delays, in milliseconds, attached to trace events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Pause after the source is first highlighted.
    pub start_delay_ms: u64,
    /// Pause while the selected node is shown as current.
    pub current_delay_ms: u64,
    /// Pause on the transient flash of a relaxed neighbour.
    pub relax_delay_ms: u64,
    /// Pause after all neighbours of a node have been processed.
    pub settle_delay_ms: u64,
    /// Pause after each shortest-path highlight.
    pub path_delay_ms: u64,
    /// Replay speed multiplier. Every delay is divided by this.
    pub playback_rate: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            current_delay_ms: 700,
            relax_delay_ms: 300,
            settle_delay_ms: 500,
            path_delay_ms: 0,
            playback_rate: 1.0,
        }
    }
}

impl AnimationConfig {
    /// A config with every delay set to zero.
    pub fn instant() -> Self {
        Self {
            start_delay_ms: 0,
            current_delay_ms: 0,
            relax_delay_ms: 0,
            settle_delay_ms: 0,
            path_delay_ms: 0,
            playback_rate: 1.0,
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the playback rate can scale a delay.
    pub fn validate(&self) -> Result<()> {
        if !self.playback_rate.is_finite() || self.playback_rate <= 0.0 {
            return Err(Error::Config(format!(
                "playback_rate must be a positive finite number, got {}",
                self.playback_rate
            )));
        }
        Ok(())
    }

    /// Wall-clock pause for a nominal delay at the configured rate.
    pub fn scaled(&self, delay_ms: u64) -> Duration {
        if delay_ms == 0 {
            return Duration::ZERO;
        }
        let nanos = (delay_ms as f64 * 1_000_000.0 / self.playback_rate).round();
        Duration::from_nanos(nanos as u64)
    }
}
