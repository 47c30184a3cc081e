use ahash::HashSet;
use itertools::Itertools;
use tracing::trace;

use crate::actor::actor_ref::ActorRef;
use crate::actor::actor_system::ActorSystem;
use crate::actor::context::ActorContext;
use crate::actor::dispatchers::DEFAULT_DISPATCHER_ID;
use crate::config::deployment::DeploymentConfig;
use crate::error::{Error, Result};
use crate::routing::routee::actor_selection_routee::ActorSelectionRoutee;
use crate::routing::routee::Routee;
use crate::routing::router::Router;
use crate::routing::router_actor::RouterActor;
use crate::routing::router_config::TRouterConfig;
use crate::routing::surrogate::RouterConfigSurrogate;

/// Routes to existing actors addressed by path. The router never creates or
/// supervises them, each path is resolved anew whenever routees are asked for.
#[derive(Debug, Clone)]
pub struct Group {
    paths: HashSet<String>,
    router_dispatcher: String,
}

impl Group {
    pub fn new<I, S>(paths: I) -> Self
        where
            I: IntoIterator<Item=S>,
            S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            router_dispatcher: DEFAULT_DISPATCHER_ID.to_string(),
        }
    }

    pub fn from_routees<'a>(routees: impl IntoIterator<Item=&'a ActorRef>) -> Self {
        Self::new(routees.into_iter().map(|routee| routee.path().to_string()))
    }

    pub fn from_config(config: &DeploymentConfig) -> Self {
        let group = Self::new(config.routees.paths.iter().cloned());
        match &config.router_dispatcher {
            None => group,
            Some(dispatcher) => group.with_router_dispatcher(dispatcher.clone()),
        }
    }

    pub fn with_router_dispatcher(mut self, dispatcher: impl Into<String>) -> Self {
        self.router_dispatcher = dispatcher.into();
        self
    }

    pub fn paths(&self) -> &HashSet<String> {
        &self.paths
    }

    pub fn routee_for(&self, path: &str, context: &dyn ActorContext) -> Result<Routee> {
        let selection = context
            .actor_selection(path)
            .map_err(|source| Error::Resolve { path: path.to_string(), source })?;
        Ok(ActorSelectionRoutee(selection).into())
    }
}

impl TRouterConfig for Group {
    fn router_dispatcher(&self) -> &str {
        &self.router_dispatcher
    }

    fn create_router(&self, _system: &ActorSystem) -> Result<Router> {
        Err(Error::NotSupported {
            operation: "create_router",
            config: "Group",
        })
    }

    fn create_router_actor(&self) -> Result<RouterActor> {
        Ok(RouterActor::Group)
    }

    fn get_routees(&self, context: &mut dyn ActorContext) -> Result<Vec<Routee>> {
        let context = &*context;
        trace!("{} resolve {} group routees", context.myself(), self.paths.len());
        self.paths
            .iter()
            .sorted()
            .map(|path| self.routee_for(path, context))
            .collect()
    }

    fn to_surrogate(&self, _system: &ActorSystem) -> RouterConfigSurrogate {
        RouterConfigSurrogate::Group {
            paths: self.paths.iter().cloned().sorted().collect(),
            router_dispatcher: self.router_dispatcher.clone(),
        }
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.router_dispatcher == other.router_dispatcher && self.paths == other.paths
    }
}

impl Eq for Group {}
