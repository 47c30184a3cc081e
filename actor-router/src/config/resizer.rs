use serde::{Deserialize, Serialize};

/// `resizer` block of a pool deployment. Defaults match [`DefaultResizer`](crate::routing::resizer::default_resizer::DefaultResizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizerConfig {
    pub enabled: bool,
    #[serde(rename = "lower-bound")]
    pub lower_bound: usize,
    #[serde(rename = "upper-bound")]
    pub upper_bound: usize,
    #[serde(rename = "pressure-threshold")]
    pub pressure_threshold: usize,
    #[serde(rename = "rampup-rate")]
    pub rampup_rate: f64,
    #[serde(rename = "backoff-threshold")]
    pub backoff_threshold: f64,
    #[serde(rename = "backoff-rate")]
    pub backoff_rate: f64,
    #[serde(rename = "messages-per-resize")]
    pub messages_per_resize: usize,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            lower_bound: 1,
            upper_bound: 10,
            pressure_threshold: 1,
            rampup_rate: 0.2,
            backoff_threshold: 0.3,
            backoff_rate: 0.1,
            messages_per_resize: 10,
        }
    }
}
