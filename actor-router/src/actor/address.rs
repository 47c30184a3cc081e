use std::fmt::{Display, Formatter};
use std::net::SocketAddrV4;

pub const DEFAULT_PROTOCOL: &str = "tcp";

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address {
    pub protocol: String,
    pub system: String,
    pub addr: Option<SocketAddrV4>,
}

impl Address {
    pub fn new(protocol: impl Into<String>, system: impl Into<String>, addr: Option<SocketAddrV4>) -> Self {
        Self {
            protocol: protocol.into(),
            system: system.into(),
            addr,
        }
    }

    pub fn local(system: impl Into<String>) -> Self {
        Self::new(DEFAULT_PROTOCOL, system, None)
    }

    pub fn has_local_scope(&self) -> bool {
        self.addr.is_none()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.addr {
            None => {
                write!(f, "{}://{}", self.protocol, self.system)?;
            }
            Some(addr) => {
                write!(f, "{}://{}@{}", self.protocol, self.system, addr)?;
            }
        }
        Ok(())
    }
}
