use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::actor::actor_system::ActorSystem;
use crate::error::Result;
use crate::routing::resizer::Resizer;
use crate::routing::router_config::from_config::FromConfig;
use crate::routing::router_config::group::Group;
use crate::routing::router_config::no_router::NoRouter;
use crate::routing::router_config::pool::Pool;
use crate::routing::router_config::RouterConfig;

/// Wire form of a [`RouterConfig`]. Carries only plain data, a pool's
/// supervisor strategy does not travel and comes back as the default.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub enum RouterConfigSurrogate {
    NoRouter,
    FromConfig,
    Group {
        /// Sorted, so equal groups encode to equal bytes.
        paths: Vec<String>,
        router_dispatcher: String,
    },
    Pool {
        nr_of_instances: usize,
        use_pool_dispatcher: bool,
        resizer: Option<Resizer>,
        router_dispatcher: String,
    },
}

impl RouterConfigSurrogate {
    pub fn from_surrogate(self, system: &ActorSystem) -> Result<RouterConfig> {
        trace!("{} rebuild router config from {:?}", system.name(), self);
        let config = match self {
            RouterConfigSurrogate::NoRouter => NoRouter.into(),
            RouterConfigSurrogate::FromConfig => FromConfig.into(),
            RouterConfigSurrogate::Group { paths, router_dispatcher } => {
                Group::new(paths).with_router_dispatcher(router_dispatcher).into()
            }
            RouterConfigSurrogate::Pool { nr_of_instances, use_pool_dispatcher, resizer, router_dispatcher } => {
                let mut pool = Pool::builder()
                    .nr_of_instances(nr_of_instances)
                    .use_pool_dispatcher(use_pool_dispatcher)
                    .router_dispatcher(router_dispatcher)
                    .build();
                if let Some(resizer) = resizer {
                    resizer.validate()?;
                    pool = pool.with_resizer(resizer);
                }
                pool.into()
            }
        };
        Ok(config)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = bincode::encode_to_vec(self, bincode::config::standard())?;
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (surrogate, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(surrogate)
    }
}

#[cfg(test)]
mod test {
    use crate::actor::fault_handling::{Directive, stopping_strategy};
    use crate::routing::resizer::default_resizer::DefaultResizer;
    use crate::routing::router_config::from_config::FromConfig;
    use crate::routing::router_config::group::Group;
    use crate::routing::router_config::no_router::NoRouter;
    use crate::routing::router_config::pool::Pool;
    use crate::routing::router_config::{RouterConfig, TRouterConfig};
    use crate::routing::surrogate::RouterConfigSurrogate;
    use crate::testkit::test_system;

    fn configs() -> anyhow::Result<Vec<RouterConfig>> {
        let configs = vec![
            NoRouter.into(),
            FromConfig.into(),
            Group::new(["/user/b", "/user/a", "tcp://remote@127.0.0.1:2552/user/c"]).into(),
            Group::new(["/user/a"]).with_router_dispatcher("router-dispatcher").into(),
            Pool::new(4).into(),
            Pool::builder()
                .nr_of_instances(2)
                .use_pool_dispatcher(true)
                .resizer(DefaultResizer::new(2, 6)?.into())
                .router_dispatcher("router-dispatcher")
                .build()
                .into(),
        ];
        Ok(configs)
    }

    #[test]
    fn test_surrogate_round_trip() -> anyhow::Result<()> {
        let system = test_system();
        for config in configs()? {
            let restored = config.to_surrogate(&system).from_surrogate(&system)?;
            assert_eq!(restored, config);
        }
        Ok(())
    }

    #[test]
    fn test_surrogate_bytes_round_trip() -> anyhow::Result<()> {
        let system = test_system();
        for config in configs()? {
            let bytes = config.to_surrogate(&system).encode()?;
            let restored = RouterConfigSurrogate::decode(&bytes)?.from_surrogate(&system)?;
            assert_eq!(restored, config);
        }
        Ok(())
    }

    #[test]
    fn test_group_surrogate_is_sorted() {
        let system = test_system();
        let left = Group::new(["/user/b", "/user/a"]).to_surrogate(&system);
        let right = Group::new(["/user/a", "/user/b"]).to_surrogate(&system);
        assert_eq!(left, right);
        match left {
            RouterConfigSurrogate::Group { paths, .. } => assert_eq!(paths, ["/user/a", "/user/b"]),
            other => panic!("unexpected surrogate {:?}", other),
        }
    }

    #[test]
    fn test_pool_strategy_reset_to_default() -> anyhow::Result<()> {
        let system = test_system();
        let pool = Pool::new(3).with_supervisor_strategy(stopping_strategy());
        let restored = pool.to_surrogate(&system).from_surrogate(&system)?;
        match restored {
            RouterConfig::Pool(restored) => {
                assert_eq!(restored.supervisor_strategy().decide(&anyhow::anyhow!("boom")), Directive::Restart);
                assert_eq!(restored.supervisor_strategy().retries_exhausted(), Directive::Escalate);
            }
            other => panic!("unexpected config {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_decode_garbage() {
        assert!(RouterConfigSurrogate::decode(&[0xff, 0xff, 0xff]).is_err());
    }
}
