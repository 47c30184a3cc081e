use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::config::resizer::ResizerConfig;
use crate::error::{Error, Result};
use crate::routing::resizer::{RouteeLoad, TResizer};

/// Grows the pool when all routees are under pressure and shrinks it when
/// most of them sit idle, staying within `[lower_bound, upper_bound]`.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct DefaultResizer {
    lower_bound: usize,
    upper_bound: usize,
    /// 0: busy routees count as under pressure, 1: busy with queued
    /// messages, n > 1: at least n queued messages.
    pressure_threshold: usize,
    rampup_rate: f64,
    backoff_threshold: f64,
    backoff_rate: f64,
    messages_per_resize: usize,
}

impl DefaultResizer {
    pub fn new(lower_bound: usize, upper_bound: usize) -> Result<Self> {
        let config = ResizerConfig {
            lower_bound,
            upper_bound,
            ..Default::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &ResizerConfig) -> Result<Self> {
        let resizer = Self {
            lower_bound: config.lower_bound,
            upper_bound: config.upper_bound,
            pressure_threshold: config.pressure_threshold,
            rampup_rate: config.rampup_rate,
            backoff_threshold: config.backoff_threshold,
            backoff_rate: config.backoff_rate,
            messages_per_resize: config.messages_per_resize,
        };
        resizer.validate()?;
        Ok(resizer)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.upper_bound < self.lower_bound {
            return Err(Error::InvalidResizer(format!("upper-bound {} must be >= lower-bound {}", self.upper_bound, self.lower_bound)));
        }
        if !(self.rampup_rate >= 0.0) {
            return Err(Error::InvalidResizer(format!("rampup-rate {} must be >= 0.0", self.rampup_rate)));
        }
        if !(0.0..=1.0).contains(&self.backoff_threshold) {
            return Err(Error::InvalidResizer(format!("backoff-threshold {} must be between 0.0 and 1.0", self.backoff_threshold)));
        }
        if !(self.backoff_rate >= 0.0) {
            return Err(Error::InvalidResizer(format!("backoff-rate {} must be >= 0.0", self.backoff_rate)));
        }
        if self.messages_per_resize == 0 {
            return Err(Error::InvalidResizer("messages-per-resize must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Computed in `i64` with saturating steps, the result is clamped to the
    /// `i32` range of [`TResizer::resize`].
    pub fn capacity(&self, routees: &[RouteeLoad]) -> i32 {
        let current_size = to_i64(routees.len());
        let pressure = to_i64(self.pressure(routees));
        let delta = self.filter(pressure, current_size);
        let proposed = current_size.saturating_add(delta);
        let lower_bound = to_i64(self.lower_bound);
        let upper_bound = to_i64(self.upper_bound);
        let adjusted = if proposed < lower_bound {
            lower_bound.saturating_sub(current_size)
        } else if proposed > upper_bound {
            upper_bound.saturating_sub(current_size)
        } else {
            delta
        };
        adjusted.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Number of routees considered under pressure.
    pub fn pressure(&self, routees: &[RouteeLoad]) -> usize {
        routees
            .iter()
            .filter(|routee| match self.pressure_threshold {
                1 => routee.processing && routee.mailbox_size > 0,
                0 => routee.processing,
                threshold => routee.mailbox_size >= threshold,
            })
            .count()
    }

    fn filter(&self, pressure: i64, capacity: i64) -> i64 {
        self.rampup(pressure, capacity).saturating_add(self.backoff(pressure, capacity))
    }

    fn rampup(&self, pressure: i64, capacity: i64) -> i64 {
        if pressure < capacity {
            0
        } else {
            // float to int casts saturate
            (self.rampup_rate * capacity as f64).ceil() as i64
        }
    }

    fn backoff(&self, pressure: i64, capacity: i64) -> i64 {
        if self.backoff_threshold > 0.0
            && self.backoff_rate > 0.0
            && capacity > 0
            && (pressure as f64 / capacity as f64) < self.backoff_threshold {
            (-1.0 * self.backoff_rate * capacity as f64).floor() as i64
        } else {
            0
        }
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl Default for DefaultResizer {
    fn default() -> Self {
        let config = ResizerConfig::default();
        Self {
            lower_bound: config.lower_bound,
            upper_bound: config.upper_bound,
            pressure_threshold: config.pressure_threshold,
            rampup_rate: config.rampup_rate,
            backoff_threshold: config.backoff_threshold,
            backoff_rate: config.backoff_rate,
            messages_per_resize: config.messages_per_resize,
        }
    }
}

impl TResizer for DefaultResizer {
    fn is_time_for_resize(&self, message_counter: u64) -> bool {
        message_counter % self.messages_per_resize as u64 == 0
    }

    fn resize(&self, current_routees: &[RouteeLoad]) -> i32 {
        self.capacity(current_routees)
    }
}
