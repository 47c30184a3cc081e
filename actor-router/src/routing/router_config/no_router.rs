use crate::actor::actor_system::ActorSystem;
use crate::actor::context::ActorContext;
use crate::actor::dispatchers::DEFAULT_DISPATCHER_ID;
use crate::error::{Error, Result};
use crate::routing::routee::Routee;
use crate::routing::router::Router;
use crate::routing::router_actor::RouterActor;
use crate::routing::router_config::TRouterConfig;
use crate::routing::surrogate::RouterConfigSurrogate;

/// Routing disabled. Every router operation fails, the actor runs as a plain
/// actor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct NoRouter;

impl NoRouter {
    fn not_implemented(operation: &'static str) -> Error {
        Error::NotImplemented {
            operation,
            config: "NoRouter",
        }
    }
}

impl TRouterConfig for NoRouter {
    fn router_dispatcher(&self) -> &str {
        DEFAULT_DISPATCHER_ID
    }

    fn create_router(&self, _system: &ActorSystem) -> Result<Router> {
        Err(Self::not_implemented("create_router"))
    }

    fn create_router_actor(&self) -> Result<RouterActor> {
        Err(Self::not_implemented("create_router_actor"))
    }

    fn get_routees(&self, _context: &mut dyn ActorContext) -> Result<Vec<Routee>> {
        Err(Self::not_implemented("get_routees"))
    }

    fn to_surrogate(&self, _system: &ActorSystem) -> RouterConfigSurrogate {
        RouterConfigSurrogate::NoRouter
    }
}
