use itertools::Itertools;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

use crate::actor::actor_system::ActorSystem;
use crate::actor::context::ActorContext;
use crate::actor::dispatchers::{DEFAULT_DISPATCHER_ID, DEPLOYMENT_PREFIX, POOL_DISPATCHER_SUFFIX};
use crate::actor::fault_handling::{default_pool_strategy, SupervisorStrategy};
use crate::actor::props::Props;
use crate::config::deployment::DeploymentConfig;
use crate::error::{Error, Result};
use crate::routing::resizer::Resizer;
use crate::routing::routee::actor_ref_routee::ActorRefRoutee;
use crate::routing::routee::Routee;
use crate::routing::router::Router;
use crate::routing::router_actor::RouterActor;
use crate::routing::router_config::TRouterConfig;
use crate::routing::surrogate::RouterConfigSurrogate;

/// Routes to children the router creates and supervises itself.
#[derive(Debug, Clone, TypedBuilder)]
pub struct Pool {
    nr_of_instances: usize,
    /// Run the routees on a dispatcher dedicated to this pool.
    #[builder(default)]
    use_pool_dispatcher: bool,
    #[builder(default, setter(strip_option))]
    resizer: Option<Resizer>,
    /// `None` means [`default_pool_strategy`].
    #[builder(default, setter(strip_option))]
    supervisor_strategy: Option<Box<dyn SupervisorStrategy>>,
    #[builder(default = DEFAULT_DISPATCHER_ID.to_string(), setter(into))]
    router_dispatcher: String,
}

impl Pool {
    pub fn new(nr_of_instances: usize) -> Self {
        Self::builder().nr_of_instances(nr_of_instances).build()
    }

    pub fn from_config(config: &DeploymentConfig) -> Result<Self> {
        let nr_of_instances = config.nr_of_instances.ok_or(Error::MissingConfig("nr-of-instances"))?;
        let pool = Self {
            nr_of_instances,
            use_pool_dispatcher: config.pool_dispatcher.is_some(),
            resizer: Resizer::from_config(&config.resizer)?,
            supervisor_strategy: None,
            router_dispatcher: config
                .router_dispatcher
                .clone()
                .unwrap_or_else(|| DEFAULT_DISPATCHER_ID.to_string()),
        };
        Ok(pool)
    }

    pub fn nr_of_instances(&self) -> usize {
        self.nr_of_instances
    }

    pub fn use_pool_dispatcher(&self) -> bool {
        self.use_pool_dispatcher
    }

    pub fn resizer(&self) -> Option<&Resizer> {
        self.resizer.as_ref()
    }

    pub fn supervisor_strategy(&self) -> Box<dyn SupervisorStrategy> {
        match &self.supervisor_strategy {
            None => default_pool_strategy(),
            Some(strategy) => strategy.clone(),
        }
    }

    pub fn with_supervisor_strategy(mut self, strategy: Box<dyn SupervisorStrategy>) -> Self {
        self.supervisor_strategy = Some(strategy);
        self
    }

    pub fn with_resizer(mut self, resizer: impl Into<Resizer>) -> Self {
        self.resizer = Some(resizer.into());
        self
    }

    pub fn with_router_dispatcher(mut self, dispatcher: impl Into<String>) -> Self {
        self.router_dispatcher = dispatcher.into();
        self
    }

    /// Routees that still run on the default dispatcher are moved to the
    /// pool's own dispatcher `akka.actor.deployment./<path>.pool-dispatcher`.
    pub fn enrich_with_pool_dispatcher(&self, props: Props, context: &dyn ActorContext) -> Props {
        if self.use_pool_dispatcher && props.dispatcher() == DEFAULT_DISPATCHER_ID {
            let path = context.myself().path().elements().iter().skip(1).join("/");
            let dispatcher = format!("{}./{}.{}", DEPLOYMENT_PREFIX, path, POOL_DISPATCHER_SUFFIX);
            props.with_dispatcher(dispatcher)
        } else {
            props
        }
    }

    pub fn new_routee(&self, routee_props: Props, context: &mut dyn ActorContext) -> Result<Routee> {
        let props = self.enrich_with_pool_dispatcher(routee_props, context);
        let routee = context.spawn_anonymous_actor(props).map_err(Error::Spawn)?;
        trace!("{} spawn pool routee {}", context.myself(), routee);
        Ok(ActorRefRoutee(routee).into())
    }

    pub fn create_routees(&self, routee_props: &Props, context: &mut dyn ActorContext) -> Result<Vec<Routee>> {
        (0..self.nr_of_instances)
            .map(|_| self.new_routee(routee_props.clone(), context))
            .collect()
    }

    /// Fills in what this pool leaves at its default from `other`. Used when a
    /// deployment section and the code both define a pool.
    pub fn override_unset_config(&self, other: &Pool) -> Pool {
        let mut pool = self.clone();
        if pool.resizer.is_none() {
            pool.resizer = other.resizer.clone();
        }
        if pool.supervisor_strategy.is_none() {
            pool.supervisor_strategy = other.supervisor_strategy.clone();
        }
        pool
    }
}

impl TRouterConfig for Pool {
    fn router_dispatcher(&self) -> &str {
        &self.router_dispatcher
    }

    fn create_router(&self, _system: &ActorSystem) -> Result<Router> {
        Err(Error::NotSupported {
            operation: "create_router",
            config: "Pool",
        })
    }

    fn create_router_actor(&self) -> Result<RouterActor> {
        let supervisor_strategy = self.supervisor_strategy();
        let router_actor = match &self.resizer {
            None => RouterActor::Pool { supervisor_strategy },
            Some(resizer) => RouterActor::ResizablePool {
                supervisor_strategy,
                resizer: resizer.clone(),
            },
        };
        Ok(router_actor)
    }

    /// Creates routees from empty props, the router actor calls
    /// [`Pool::create_routees`] with the real routee props instead.
    fn get_routees(&self, context: &mut dyn ActorContext) -> Result<Vec<Routee>> {
        debug!("{} create {} pool routees from empty props", context.myself(), self.nr_of_instances);
        self.create_routees(&Props::empty(), context)
    }

    fn stop_router_when_all_routees_removed(&self) -> bool {
        self.resizer.is_none()
    }

    fn to_surrogate(&self, _system: &ActorSystem) -> RouterConfigSurrogate {
        RouterConfigSurrogate::Pool {
            nr_of_instances: self.nr_of_instances,
            use_pool_dispatcher: self.use_pool_dispatcher,
            resizer: self.resizer.clone(),
            router_dispatcher: self.router_dispatcher.clone(),
        }
    }
}

/// The supervisor strategy holds a closure and takes no part in equality.
impl PartialEq for Pool {
    fn eq(&self, other: &Self) -> bool {
        self.router_dispatcher == other.router_dispatcher
            && self.resizer == other.resizer
            && self.use_pool_dispatcher == other.use_pool_dispatcher
            && self.nr_of_instances == other.nr_of_instances
    }
}

#[cfg(test)]
mod test {
    use crate::actor::dispatchers::DEFAULT_DISPATCHER_ID;
    use crate::actor::fault_handling::{Directive, stopping_strategy};
    use crate::actor::props::Props;
    use crate::config::deployment::DeploymentConfig;
    use crate::config::resizer::ResizerConfig;
    use crate::error::Error;
    use crate::routing::resizer::default_resizer::DefaultResizer;
    use crate::routing::resizer::Resizer;
    use crate::routing::routee::Routee;
    use crate::routing::router_actor::RouterActor;
    use crate::routing::router_config::pool::Pool;
    use crate::routing::router_config::TRouterConfig;
    use crate::testkit::{test_system, TestContext};

    struct Worker;

    #[test]
    fn test_router_actor_kind_follows_resizer() -> anyhow::Result<()> {
        let plain = Pool::new(3).create_router_actor()?;
        assert!(matches!(plain, RouterActor::Pool { .. }));
        assert!(!plain.is_resizable());
        let resizable = Pool::new(3).with_resizer(DefaultResizer::default()).create_router_actor()?;
        assert!(resizable.is_resizable());
        assert!(resizable.resizer().is_some());
        assert!(resizable.supervisor_strategy().is_some());
        Ok(())
    }

    #[test]
    fn test_default_strategy_escalates() -> anyhow::Result<()> {
        let pool = Pool::new(1);
        let strategy = pool.supervisor_strategy();
        assert_eq!(strategy.max_nr_of_retries(), 10);
        assert_eq!(strategy.decide(&anyhow::anyhow!("boom")), Directive::Restart);
        assert_eq!(strategy.retries_exhausted(), Directive::Escalate);
        let custom = Pool::new(1).with_supervisor_strategy(stopping_strategy());
        let router_actor = custom.create_router_actor()?;
        let strategy = router_actor.supervisor_strategy().unwrap();
        assert_eq!(strategy.decide(&anyhow::anyhow!("boom")), Directive::Stop);
        Ok(())
    }

    #[test]
    fn test_enrich_with_pool_dispatcher() {
        let system = test_system();
        let context = TestContext::new(&system, "/user/workers");
        let pool = Pool::builder().nr_of_instances(2).use_pool_dispatcher(true).build();
        let enriched = pool.enrich_with_pool_dispatcher(Props::new::<Worker>(), &context);
        assert_eq!(enriched.dispatcher(), "akka.actor.deployment./workers.pool-dispatcher");
        let twice = pool.enrich_with_pool_dispatcher(enriched.clone(), &context);
        assert_eq!(twice, enriched);
    }

    #[test]
    fn test_enrich_keeps_custom_dispatcher() {
        let system = test_system();
        let context = TestContext::new(&system, "/user/parent/workers");
        let pool = Pool::builder().nr_of_instances(2).use_pool_dispatcher(true).build();
        let props = Props::new::<Worker>().with_dispatcher("blocking-io");
        assert_eq!(pool.enrich_with_pool_dispatcher(props, &context).dispatcher(), "blocking-io");
        let nested = pool.enrich_with_pool_dispatcher(Props::new::<Worker>(), &context);
        assert_eq!(nested.dispatcher(), "akka.actor.deployment./parent/workers.pool-dispatcher");
        let disabled = Pool::new(2).enrich_with_pool_dispatcher(Props::new::<Worker>(), &context);
        assert_eq!(disabled.dispatcher(), DEFAULT_DISPATCHER_ID);
    }

    #[test]
    fn test_pool_equality_ignores_strategy() {
        let default = Pool::new(3);
        let stopping = Pool::new(3).with_supervisor_strategy(stopping_strategy());
        assert_eq!(default, stopping);
        assert_ne!(default, Pool::new(4));
        assert_ne!(default, Pool::new(3).with_resizer(DefaultResizer::default()));
        assert_ne!(default, Pool::builder().nr_of_instances(3).use_pool_dispatcher(true).build());
        assert_ne!(default, Pool::new(3).with_router_dispatcher("router-dispatcher"));
    }

    #[test]
    fn test_create_routees_with_real_props() -> anyhow::Result<()> {
        let system = test_system();
        let mut context = TestContext::new(&system, "/user/workers");
        let pool = Pool::builder().nr_of_instances(3).use_pool_dispatcher(true).build();
        let routees = pool.create_routees(&Props::new::<Worker>(), &mut context)?;
        assert_eq!(routees.len(), 3);
        assert!(routees.iter().all(|routee| matches!(routee, Routee::ActorRefRoutee(_))));
        assert_eq!(context.spawned().len(), 3);
        for props in context.spawned() {
            assert!(props.name().ends_with("Worker"));
            assert_eq!(props.dispatcher(), "akka.actor.deployment./workers.pool-dispatcher");
        }
        Ok(())
    }

    #[test]
    fn test_get_routees_uses_empty_props() -> anyhow::Result<()> {
        let system = test_system();
        let mut context = TestContext::new(&system, "/user/workers");
        let routees = Pool::new(2).get_routees(&mut context)?;
        assert_eq!(routees.len(), 2);
        assert!(context.spawned().iter().all(|props| props.name() == "EmptyActor"));
        assert!(Pool::new(0).get_routees(&mut context)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_spawn_failure() {
        let system = test_system();
        let mut context = TestContext::new(&system, "/user/workers").with_failing_spawn();
        let result = Pool::new(2).create_routees(&Props::new::<Worker>(), &mut context);
        assert!(matches!(result, Err(Error::Spawn(_))));
    }

    #[test]
    fn test_from_config() -> anyhow::Result<()> {
        let config = DeploymentConfig {
            router: "pool".to_string(),
            nr_of_instances: Some(5),
            pool_dispatcher: Some(config::Value::from("")),
            resizer: ResizerConfig { enabled: true, ..Default::default() },
            ..Default::default()
        };
        let pool = Pool::from_config(&config)?;
        assert_eq!(pool.nr_of_instances(), 5);
        assert!(pool.use_pool_dispatcher());
        assert_eq!(pool.resizer(), Some(&Resizer::from(DefaultResizer::default())));
        assert_eq!(pool.router_dispatcher(), DEFAULT_DISPATCHER_ID);
        let without_dispatcher = DeploymentConfig { pool_dispatcher: None, ..config.clone() };
        assert!(!Pool::from_config(&without_dispatcher)?.use_pool_dispatcher());
        let missing = DeploymentConfig { nr_of_instances: None, ..config };
        assert!(matches!(Pool::from_config(&missing), Err(Error::MissingConfig("nr-of-instances"))));
        Ok(())
    }

    #[test]
    fn test_override_unset_config() {
        let code = Pool::new(2)
            .with_resizer(DefaultResizer::default())
            .with_supervisor_strategy(stopping_strategy());
        let deployed = Pool::new(8).override_unset_config(&code);
        assert_eq!(deployed.nr_of_instances(), 8);
        assert!(deployed.resizer().is_some());
        assert_eq!(deployed.supervisor_strategy().decide(&anyhow::anyhow!("boom")), Directive::Stop);
        let own = Pool::new(8).with_supervisor_strategy(stopping_strategy()).override_unset_config(&Pool::new(1));
        assert_eq!(own.supervisor_strategy().decide(&anyhow::anyhow!("boom")), Directive::Stop);
    }
}
