use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use dyn_clone::DynClone;

use crate::actor::actor_path::ActorPath;
use crate::message::{DynMessage, Message};

/// What the routing layer needs from an actor reference. Concrete references
/// (local, remote, dead letters) are supplied by the actor runtime.
pub trait TActorRef: Debug + Send + Sync + DynClone + 'static {
    fn path(&self) -> &ActorPath;

    fn tell(&self, message: DynMessage, sender: Option<ActorRef>);
}

dyn_clone::clone_trait_object!(TActorRef);

impl<T: ?Sized> ActorRefExt for T where T: TActorRef {}

pub trait ActorRefExt: TActorRef {
    fn cast<M>(&self, message: M, sender: Option<ActorRef>) where M: Message {
        self.tell(DynMessage::user(message), sender);
    }

    fn cast_ns<M>(&self, message: M) where M: Message {
        self.tell(DynMessage::user(message), ActorRef::no_sender());
    }
}

#[derive(Clone)]
pub struct ActorRef(Box<dyn TActorRef>);

impl ActorRef {
    pub fn new<R>(actor_ref: R) -> Self where R: TActorRef {
        Self(Box::new(actor_ref))
    }

    pub fn no_sender() -> Option<ActorRef> {
        None
    }
}

impl Deref for ActorRef {
    type Target = Box<dyn TActorRef>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for ActorRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ActorRef")
            .field(self.path())
            .finish()
    }
}

impl Display for ActorRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor[{}]", self.path())
    }
}

impl Hash for ActorRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path().hash(state);
    }
}

impl PartialEq<Self> for ActorRef {
    fn eq(&self, other: &Self) -> bool {
        self.path().eq(other.path())
    }
}

impl Eq for ActorRef {}

impl PartialOrd<Self> for ActorRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ActorRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path().cmp(other.path())
    }
}
