use enum_dispatch::enum_dispatch;

use crate::actor::actor_system::ActorSystem;
use crate::actor::context::ActorContext;
use crate::error::Result;
use crate::message::{DynMessage, MessageType};
use crate::routing::routee::Routee;
use crate::routing::router::Router;
use crate::routing::router_actor::RouterActor;
use crate::routing::router_config::from_config::FromConfig;
use crate::routing::router_config::group::Group;
use crate::routing::router_config::no_router::NoRouter;
use crate::routing::router_config::pool::Pool;
use crate::routing::surrogate::RouterConfigSurrogate;

pub mod from_config;
pub mod group;
pub mod no_router;
pub mod pool;

#[enum_dispatch(RouterConfig)]
pub trait TRouterConfig: Send + Sync + 'static {
    /// Dispatcher the router actor itself runs on.
    fn router_dispatcher(&self) -> &str;

    fn create_router(&self, system: &ActorSystem) -> Result<Router>;

    fn create_router_actor(&self) -> Result<RouterActor>;

    /// The current routee set, recomputed on every call.
    fn get_routees(&self, context: &mut dyn ActorContext) -> Result<Vec<Routee>>;

    /// Management messages are handled by the router actor itself and never
    /// forwarded to a routee.
    fn is_management_message(&self, message: &DynMessage) -> bool {
        matches!(
            message.message_type(),
            MessageType::System | MessageType::AutoReceived | MessageType::RouterManagement
        )
    }

    fn stop_router_when_all_routees_removed(&self) -> bool {
        true
    }

    fn to_surrogate(&self, system: &ActorSystem) -> RouterConfigSurrogate;
}

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum RouterConfig {
    NoRouter,
    FromConfig,
    Group,
    Pool,
}

impl RouterConfig {
    /// Settings of `self` win; no variant inherits anything from `other`.
    pub fn with_fallback(&self, _other: &RouterConfig) -> RouterConfig {
        self.clone()
    }

    pub fn name(&self) -> &'static str {
        match self {
            RouterConfig::NoRouter(_) => "NoRouter",
            RouterConfig::FromConfig(_) => "FromConfig",
            RouterConfig::Group(_) => "Group",
            RouterConfig::Pool(_) => "Pool",
        }
    }

    pub fn is_from_config(&self) -> bool {
        matches!(self, RouterConfig::FromConfig(_))
    }

    pub fn is_no_router(&self) -> bool {
        matches!(self, RouterConfig::NoRouter(_))
    }
}

impl PartialEq for RouterConfig {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RouterConfig::NoRouter(a), RouterConfig::NoRouter(b)) => a == b,
            (RouterConfig::FromConfig(a), RouterConfig::FromConfig(b)) => a == b,
            (RouterConfig::Group(a), RouterConfig::Group(b)) => a == b,
            (RouterConfig::Pool(a), RouterConfig::Pool(b)) => a == b,
            _ => false,
        }
    }
}
