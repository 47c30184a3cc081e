pub mod actor_path;
pub mod actor_ref;
pub mod actor_ref_factory;
pub mod actor_selection;
pub mod actor_system;
pub mod address;
pub mod context;
pub mod deployer;
pub mod dispatchers;
pub mod fault_handling;
pub mod props;
