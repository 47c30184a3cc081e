use std::fmt::{Display, Formatter};
use std::net::SocketAddrV4;
use std::str::FromStr;

use itertools::Itertools;
use url::Url;

use crate::actor::address::Address;
use crate::error::Error;

/// Logical location of an actor: the system [`Address`] plus the names from
/// the root guardian downwards. The root path has no elements.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ActorPath {
    address: Address,
    elements: Vec<String>,
}

impl ActorPath {
    pub fn root(address: Address) -> Self {
        Self {
            address,
            elements: Vec::new(),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Name of the last element, empty for the root path.
    pub fn name(&self) -> &str {
        self.elements.last().map(|e| e.as_str()).unwrap_or("")
    }

    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self) -> ActorPath {
        let mut elements = self.elements.clone();
        elements.pop();
        Self {
            address: self.address.clone(),
            elements,
        }
    }

    pub fn child(&self, name: &str) -> ActorPath {
        self.descendant([name])
    }

    pub fn descendant<'a, I>(&self, names: I) -> ActorPath
        where
            I: IntoIterator<Item=&'a str>,
    {
        let mut elements = self.elements.clone();
        elements.extend(names.into_iter().filter(|n| !n.is_empty()).map(|n| n.to_string()));
        Self {
            address: self.address.clone(),
            elements,
        }
    }

    pub fn to_string_without_address(&self) -> String {
        format!("/{}", self.elements.iter().join("/"))
    }
}

impl Display for ActorPath {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.address, self.to_string_without_address())
    }
}

impl FromStr for ActorPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidActorPath(s.to_string());
        let url = Url::parse(s).map_err(|_| invalid())?;
        let host = url.host_str().ok_or_else(invalid)?;
        let address = if url.username().is_empty() {
            Address::new(url.scheme(), host, None)
        } else {
            let port = url.port().ok_or_else(invalid)?;
            let addr: SocketAddrV4 = format!("{}:{}", host, port).parse().map_err(|_| invalid())?;
            Address::new(url.scheme(), url.username(), Some(addr))
        };
        let root = ActorPath::root(address);
        Ok(root.descendant(url.path().split('/')))
    }
}
