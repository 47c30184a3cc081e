use crate::actor::actor_system::ActorSystem;
use crate::actor::context::ActorContext;
use crate::actor::dispatchers::DEFAULT_DISPATCHER_ID;
use crate::error::{Error, Result};
use crate::routing::routee::Routee;
use crate::routing::router::Router;
use crate::routing::router_actor::RouterActor;
use crate::routing::router_config::TRouterConfig;
use crate::routing::surrogate::RouterConfigSurrogate;

/// Placeholder telling the deployer to take the router definition from the
/// `akka.actor.deployment` section. It must be replaced before a router is
/// created, so all router operations fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FromConfig;

impl FromConfig {
    fn not_supported(operation: &'static str) -> Error {
        Error::NotSupported {
            operation,
            config: "FromConfig",
        }
    }
}

impl TRouterConfig for FromConfig {
    fn router_dispatcher(&self) -> &str {
        DEFAULT_DISPATCHER_ID
    }

    fn create_router(&self, _system: &ActorSystem) -> Result<Router> {
        Err(Self::not_supported("create_router"))
    }

    fn create_router_actor(&self) -> Result<RouterActor> {
        Err(Self::not_supported("create_router_actor"))
    }

    fn get_routees(&self, _context: &mut dyn ActorContext) -> Result<Vec<Routee>> {
        Err(Self::not_supported("get_routees"))
    }

    fn to_surrogate(&self, _system: &ActorSystem) -> RouterConfigSurrogate {
        RouterConfigSurrogate::FromConfig
    }
}

#[cfg(test)]
mod test {
    use crate::actor::dispatchers::DEFAULT_DISPATCHER_ID;
    use crate::error::Error;
    use crate::routing::router_config::from_config::FromConfig;
    use crate::routing::router_config::TRouterConfig;
    use crate::testkit::{test_system, TestContext};

    #[test]
    fn test_from_config_must_be_resolved_first() {
        let system = test_system();
        let mut context = TestContext::new(&system, "/user/workers");
        assert_eq!(FromConfig.router_dispatcher(), DEFAULT_DISPATCHER_ID);
        assert!(matches!(FromConfig.create_router(&system), Err(Error::NotSupported { operation: "create_router", .. })));
        assert!(matches!(FromConfig.create_router_actor(), Err(Error::NotSupported { .. })));
        assert!(matches!(FromConfig.get_routees(&mut context), Err(Error::NotSupported { operation: "get_routees", .. })));
        assert_eq!(FromConfig, FromConfig::default());
    }
}
