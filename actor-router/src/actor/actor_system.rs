use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use crate::actor::address::Address;
use crate::actor::deployer::Deployer;
use crate::config::settings::Settings;

/// Handle to the system a router lives in, as far as routing needs it: its
/// name, address and the deployer holding its deployment settings. Cheap to clone.
#[derive(Clone)]
pub struct ActorSystem {
    inner: Arc<SystemInner>,
}

pub struct SystemInner {
    name: String,
    address: Address,
    deployer: Deployer,
}

impl Debug for ActorSystem {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_struct("ActorSystem")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("deployer", &self.deployer)
            .finish_non_exhaustive()
    }
}

impl Deref for ActorSystem {
    type Target = Arc<SystemInner>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ActorSystem {
    pub fn new(name: impl Into<String>, settings: Settings) -> Self {
        let name = name.into();
        let address = Address::local(name.clone());
        let deployer = Deployer::new(settings);
        let inner = SystemInner {
            name,
            address,
            deployer,
        };
        Self { inner: Arc::new(inner) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn deployer(&self) -> &Deployer {
        &self.deployer
    }
}
