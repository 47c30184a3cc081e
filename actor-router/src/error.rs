use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{operation} is not implemented by {config}, routing is disabled for this actor")]
    NotImplemented {
        operation: &'static str,
        config: &'static str,
    },
    #[error("{operation} is not supported by {config}, resolve the router config from deployment first")]
    NotSupported {
        operation: &'static str,
        config: &'static str,
    },
    #[error("configuration missing for router {0} in akka.actor.deployment section")]
    ConfigurationMissing(String),
    #[error("missing required router config key {0}")]
    MissingConfig(&'static str),
    #[error("deployment paths {0} differ only in case")]
    DeploymentCollision(String),
    #[error("unknown router type {0}, expected one of from-code, pool, group")]
    UnknownRouter(String),
    #[error("invalid resizer: {0}")]
    InvalidResizer(String),
    #[error("invalid actor path {0}")]
    InvalidActorPath(String),
    #[error("failed to spawn routee")]
    Spawn(#[source] anyhow::Error),
    #[error("failed to resolve routee path {path}")]
    Resolve {
        path: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
}
