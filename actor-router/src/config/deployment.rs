use serde::Deserialize;

use crate::config::resizer::ResizerConfig;

pub const ROUTER_FROM_CODE: &str = "from-code";
pub const ROUTER_POOL: &str = "pool";
pub const ROUTER_GROUP: &str = "group";

/// One `akka.actor.deployment."/path"` block.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default = "default_router")]
    pub router: String,
    #[serde(rename = "nr-of-instances", default)]
    pub nr_of_instances: Option<usize>,
    #[serde(default)]
    pub routees: RouteesConfig,
    #[serde(default)]
    pub resizer: ResizerConfig,
    /// Only presence matters, the block itself is read by the dispatcher
    /// configurator.
    #[serde(rename = "pool-dispatcher", default)]
    pub pool_dispatcher: Option<config::Value>,
    #[serde(rename = "router-dispatcher", default)]
    pub router_dispatcher: Option<String>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            router: default_router(),
            nr_of_instances: None,
            routees: RouteesConfig::default(),
            resizer: ResizerConfig::default(),
            pool_dispatcher: None,
            router_dispatcher: None,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
pub struct RouteesConfig {
    #[serde(default)]
    pub paths: Vec<String>,
}

fn default_router() -> String {
    ROUTER_FROM_CODE.to_string()
}
