pub mod management;
pub mod resizer;
pub mod routee;
pub mod router;
pub mod router_actor;
pub mod router_config;
pub mod surrogate;
