use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::actor::actor_path::ActorPath;
use crate::actor::actor_ref::ActorRef;
use crate::error::Error;
use crate::message::{DynMessage, Message};

/// A path below an anchor actor, resolved lazily on every delivery.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ActorSelection {
    pub(crate) anchor: ActorRef,
    pub(crate) elements: Vec<String>,
}

impl ActorSelection {
    pub fn new<'a>(anchor: ActorRef, elements: impl IntoIterator<Item=&'a str>) -> Self {
        let elements = elements
            .into_iter()
            .filter(|e| !e.is_empty())
            .map(|e| e.to_string())
            .collect();
        Self { anchor, elements }
    }

    pub fn anchor(&self) -> &ActorRef {
        &self.anchor
    }

    pub fn path_str(&self) -> String {
        format!("/{}", self.elements.iter().join("/"))
    }

    /// Full path of the selected actor, anchor address included.
    pub fn to_serialization_format(&self) -> String {
        self.anchor
            .path()
            .descendant(self.elements.iter().map(|e| e.as_str()))
            .to_string()
    }

    pub fn tell(&self, message: DynMessage, sender: Option<ActorRef>) {
        let message = ActorSelectionMessage {
            message,
            elements: self.elements.clone(),
        };
        self.anchor.tell(DynMessage::system(message), sender);
    }
}

impl Display for ActorSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActorSelection[Anchor({}), Path({})]", self.anchor.path(), self.path_str())
    }
}

/// Envelope delivered to the anchor, which walks `elements` to the target.
#[derive(Debug)]
pub struct ActorSelectionMessage {
    pub message: DynMessage,
    pub elements: Vec<String>,
}

impl Message for ActorSelectionMessage {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SelectionAnchor {
    /// `scheme://system@host:port/...`, anchored at that system's root.
    Root(ActorPath),
    /// `/user/...`, anchored at the local root guardian.
    LocalRoot,
    /// `child/grandchild`, anchored at the calling actor.
    Relative,
}

/// A selection string split into the anchor to start from and the names to
/// walk below it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SelectionPath {
    pub anchor: SelectionAnchor,
    pub elements: Vec<String>,
}

impl FromStr for SelectionPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = |path: &str| {
            path.split('/')
                .filter(|e| !e.is_empty())
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
        };
        if s.trim().is_empty() {
            Err(Error::InvalidActorPath(s.to_string()))
        } else if s.contains("://") {
            let path: ActorPath = s.parse()?;
            let root = ActorPath::root(path.address().clone());
            Ok(Self {
                anchor: SelectionAnchor::Root(root),
                elements: path.elements().to_vec(),
            })
        } else if s.starts_with('/') {
            Ok(Self {
                anchor: SelectionAnchor::LocalRoot,
                elements: split(s),
            })
        } else {
            Ok(Self {
                anchor: SelectionAnchor::Relative,
                elements: split(s),
            })
        }
    }
}
