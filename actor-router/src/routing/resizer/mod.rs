use bincode::{Decode, Encode};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::config::resizer::ResizerConfig;
use crate::error::Result;
use crate::routing::resizer::default_resizer::DefaultResizer;

pub mod default_resizer;

/// Load snapshot of one routee, taken by the router actor before asking the
/// resizer for a new size.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RouteeLoad {
    /// The routee is currently processing a message.
    pub processing: bool,
    pub mailbox_size: usize,
}

#[enum_dispatch(Resizer)]
pub trait TResizer {
    /// Whether the router should ask for a new size after `message_counter`
    /// routed messages.
    fn is_time_for_resize(&self, message_counter: u64) -> bool;

    /// Number of routees to add (positive) or remove (negative).
    fn resize(&self, current_routees: &[RouteeLoad]) -> i32;
}

#[enum_dispatch]
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub enum Resizer {
    DefaultResizer,
}

impl Resizer {
    pub fn from_config(config: &ResizerConfig) -> Result<Option<Resizer>> {
        if config.enabled {
            let resizer = DefaultResizer::from_config(config)?;
            Ok(Some(resizer.into()))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Resizer::DefaultResizer(resizer) => resizer.validate(),
        }
    }
}
