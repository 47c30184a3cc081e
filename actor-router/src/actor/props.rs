use std::any::type_name;

use crate::actor::dispatchers::DEFAULT_DISPATCHER_ID;
use crate::routing::router_config::RouterConfig;

/// Construction parameters for an actor. The runtime turns these into a
/// running actor; the routing layer only reads and rewrites the descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct Props {
    pub(crate) name: &'static str,
    pub(crate) dispatcher: String,
    pub(crate) router_config: Option<RouterConfig>,
}

impl Props {
    pub fn new<A>() -> Self where A: 'static {
        Self {
            name: type_name::<A>(),
            dispatcher: DEFAULT_DISPATCHER_ID.to_string(),
            router_config: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            name: "EmptyActor",
            dispatcher: DEFAULT_DISPATCHER_ID.to_string(),
            router_config: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dispatcher(&self) -> &str {
        &self.dispatcher
    }

    pub fn router_config(&self) -> Option<&RouterConfig> {
        self.router_config.as_ref()
    }

    pub fn with_dispatcher(mut self, dispatcher: impl Into<String>) -> Self {
        self.dispatcher = dispatcher.into();
        self
    }

    pub fn with_router(mut self, router_config: impl Into<RouterConfig>) -> Self {
        self.router_config = Some(router_config.into());
        self
    }
}
