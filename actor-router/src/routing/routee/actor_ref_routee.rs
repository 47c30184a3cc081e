use std::ops::Deref;

use crate::actor::actor_ref::ActorRef;
use crate::message::DynMessage;
use crate::routing::routee::TRoutee;

/// A routee the router holds a direct reference to, e.g. a pool child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorRefRoutee(pub ActorRef);

impl Deref for ActorRefRoutee {
    type Target = ActorRef;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TRoutee for ActorRefRoutee {
    fn send(&self, message: DynMessage, sender: Option<ActorRef>) {
        self.tell(message, sender);
    }
}
