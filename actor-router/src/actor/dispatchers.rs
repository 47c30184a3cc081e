pub const DEFAULT_DISPATCHER_ID: &str = "akka.actor.default-dispatcher";

/// Configuration prefix under which per-router settings live.
pub const DEPLOYMENT_PREFIX: &str = "akka.actor.deployment";

pub const POOL_DISPATCHER_SUFFIX: &str = "pool-dispatcher";
