use crate::actor::actor_ref::ActorRef;
use crate::actor::actor_selection::ActorSelection;
use crate::actor::actor_system::ActorSystem;
use crate::actor::props::Props;

/// Creates and looks up actors on behalf of the router. Implemented by the
/// actor runtime's context.
pub trait ActorRefFactory {
    fn system(&self) -> &ActorSystem;

    fn lookup_root(&self) -> ActorRef;

    fn spawn_anonymous_actor(&mut self, props: Props) -> anyhow::Result<ActorRef>;

    /// Resolve `path` (absolute `/user/..`, relative, or with a remote
    /// address) into a selection without contacting the target.
    fn actor_selection(&self, path: &str) -> anyhow::Result<ActorSelection>;
}
