use crate::actor::fault_handling::SupervisorStrategy;
use crate::routing::resizer::Resizer;

/// Which router actor implementation backs a router config. The actor's
/// message loop lives in the runtime, this only names the variant and what it
/// is parameterized with.
#[derive(Debug, Clone)]
pub enum RouterActor {
    Pool {
        supervisor_strategy: Box<dyn SupervisorStrategy>,
    },
    ResizablePool {
        supervisor_strategy: Box<dyn SupervisorStrategy>,
        resizer: Resizer,
    },
    Group,
}

impl RouterActor {
    pub fn supervisor_strategy(&self) -> Option<&dyn SupervisorStrategy> {
        match self {
            RouterActor::Pool { supervisor_strategy } => Some(supervisor_strategy.as_ref()),
            RouterActor::ResizablePool { supervisor_strategy, .. } => Some(supervisor_strategy.as_ref()),
            RouterActor::Group => None,
        }
    }

    pub fn resizer(&self) -> Option<&Resizer> {
        match self {
            RouterActor::ResizablePool { resizer, .. } => Some(resizer),
            _ => None,
        }
    }

    pub fn is_resizable(&self) -> bool {
        matches!(self, RouterActor::ResizablePool { .. })
    }
}
