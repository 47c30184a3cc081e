use std::fmt::Debug;

use dyn_clone::DynClone;

use crate::actor::actor_ref::ActorRef;
use crate::ext::maybe_ref::MaybeRef;
use crate::message::DynMessage;
use crate::routing::management::Routees;
use crate::routing::routee::{Routee, TRoutee};

/// Picks the routee for one message. Round robin, random, broadcast and
/// friends live outside this crate and plug in here.
pub trait RoutingLogic: Debug + Send + Sync + DynClone + 'static {
    fn select<'a>(&self, message: &DynMessage, routees: &'a [Routee]) -> MaybeRef<'a, Routee>;
}

dyn_clone::clone_trait_object!(RoutingLogic);

/// A routing logic paired with the routees it chooses from. Immutable, every
/// change returns a new router.
#[derive(Debug, Clone)]
pub struct Router {
    pub logic: Box<dyn RoutingLogic>,
    pub routees: Vec<Routee>,
}

impl Router {
    pub fn new<L>(logic: L) -> Self where L: RoutingLogic {
        Self {
            logic: Box::new(logic),
            routees: Vec::new(),
        }
    }

    pub fn new_with_routees<L>(logic: L, routees: Vec<Routee>) -> Self where L: RoutingLogic {
        Self {
            logic: Box::new(logic),
            routees,
        }
    }

    pub fn route(&self, message: DynMessage, sender: Option<ActorRef>) {
        let routee = self.logic.select(&message, &self.routees);
        routee.send(message, sender);
    }

    pub fn with_routees(&self, routees: Vec<Routee>) -> Self {
        Self {
            logic: self.logic.clone(),
            routees,
        }
    }

    pub fn add_routee(&self, routee: Routee) -> Self {
        let mut routees = self.routees.clone();
        routees.push(routee);
        self.with_routees(routees)
    }

    pub fn remove_routee(&self, routee: &Routee) -> Self {
        let mut routees = self.routees.clone();
        routees.retain(|r| r != routee);
        self.with_routees(routees)
    }

    /// Reply to [`GetRoutees`](crate::routing::management::GetRoutees).
    pub fn current_routees(&self) -> Routees {
        Routees { routees: self.routees.clone() }
    }
}
