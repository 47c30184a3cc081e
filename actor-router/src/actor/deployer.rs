use ahash::HashMap;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::actor::actor_path::ActorPath;
use crate::config::deployment::{DeploymentConfig, ROUTER_FROM_CODE, ROUTER_GROUP, ROUTER_POOL};
use crate::config::settings::Settings;
use crate::error::{Error, Result};
use crate::routing::router_config::group::Group;
use crate::routing::router_config::pool::Pool;
use crate::routing::router_config::RouterConfig;

/// Looks up router definitions in `akka.actor.deployment` and combines them
/// with the router config given in code.
#[derive(Debug, Clone, Default)]
pub struct Deployer {
    deployments: HashMap<String, DeploymentConfig>,
}

impl Deployer {
    pub fn new(settings: Settings) -> Self {
        Self {
            deployments: settings.deployment,
        }
    }

    /// `/user/workers` is configured as `"/workers"`.
    pub fn deployment_key(path: &ActorPath) -> String {
        format!("/{}", path.elements().iter().skip(1).join("/"))
    }

    pub fn lookup(&self, path: &ActorPath) -> Option<&DeploymentConfig> {
        self.deployments.get(&Self::deployment_key(path))
    }

    /// `None` for `from-code`, the config in code is used as is.
    pub fn router_config_of(deployment: &DeploymentConfig) -> Result<Option<RouterConfig>> {
        match deployment.router.as_str() {
            ROUTER_FROM_CODE => Ok(None),
            ROUTER_POOL => Ok(Some(Pool::from_config(deployment)?.into())),
            ROUTER_GROUP => Ok(Some(Group::from_config(deployment).into())),
            other => Err(Error::UnknownRouter(other.to_string())),
        }
    }

    pub fn resolve(&self, path: &ActorPath, code_config: &RouterConfig) -> Result<RouterConfig> {
        let resolved = match self.lookup(path) {
            None => code_config.clone(),
            Some(deployment) => {
                debug!("{} use {} router from deployment", path, deployment.router);
                match (Self::router_config_of(deployment)?, code_config) {
                    (None, _) => code_config.clone(),
                    (Some(RouterConfig::Pool(deployed)), RouterConfig::Pool(code)) => {
                        deployed.override_unset_config(code).into()
                    }
                    (Some(deployed), _) => deployed.with_fallback(code_config),
                }
            }
        };
        if resolved.is_from_config() {
            warn!("{} router is FromConfig but has no deployment under {}", path, Self::deployment_key(path));
            Err(Error::ConfigurationMissing(path.to_string()))
        } else {
            Ok(resolved)
        }
    }
}
