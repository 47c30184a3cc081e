use tracing::debug;

use crate::actor::actor_ref::ActorRef;
use crate::message::DynMessage;
use crate::routing::routee::TRoutee;

/// Selected when the routee set is empty; the message is dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NoRoutee;

impl TRoutee for NoRoutee {
    fn send(&self, message: DynMessage, _sender: Option<ActorRef>) {
        debug!("no routee available, drop message {}", message.name());
    }
}
