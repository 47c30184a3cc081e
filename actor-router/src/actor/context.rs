use crate::actor::actor_ref::ActorRef;
use crate::actor::actor_ref_factory::ActorRefFactory;

/// The router actor's own context.
pub trait ActorContext: ActorRefFactory {
    fn myself(&self) -> &ActorRef;
}
