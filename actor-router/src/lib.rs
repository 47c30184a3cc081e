pub const REFERENCE: &'static str = include_str!("../reference.toml");

pub mod actor;
pub mod config;
pub mod error;
pub mod ext;
pub mod message;
pub mod routing;

#[cfg(test)]
pub(crate) mod testkit;
