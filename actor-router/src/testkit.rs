use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use parking_lot::Mutex;

use crate::actor::actor_path::ActorPath;
use crate::actor::actor_ref::{ActorRef, TActorRef};
use crate::actor::actor_ref_factory::ActorRefFactory;
use crate::actor::actor_selection::{ActorSelection, SelectionAnchor, SelectionPath};
use crate::actor::actor_system::ActorSystem;
use crate::actor::address::Address;
use crate::actor::context::ActorContext;
use crate::actor::props::Props;
use crate::config::settings::Settings;
use crate::message::DynMessage;

pub(crate) fn test_system() -> ActorSystem {
    ActorSystem::new("test", Settings::default())
}

/// Records the names of the messages it is told.
#[derive(Debug, Clone)]
pub(crate) struct TestActorRef {
    path: ActorPath,
    received: Arc<Mutex<Vec<&'static str>>>,
}

impl TestActorRef {
    pub(crate) fn new(path: ActorPath) -> Self {
        Self {
            path,
            received: Arc::default(),
        }
    }

    pub(crate) fn received(&self) -> Vec<&'static str> {
        self.received.lock().clone()
    }
}

impl TActorRef for TestActorRef {
    fn path(&self) -> &ActorPath {
        &self.path
    }

    fn tell(&self, message: DynMessage, _sender: Option<ActorRef>) {
        self.received.lock().push(message.name());
    }
}

/// Context of a router actor at `path` that records the props of every child
/// it is asked to spawn and counts the selections it resolves.
pub(crate) struct TestContext {
    system: ActorSystem,
    myself: ActorRef,
    root: ActorRef,
    spawned: Vec<Props>,
    selections: AtomicUsize,
    fail_spawn: bool,
}

impl TestContext {
    pub(crate) fn new(system: &ActorSystem, path: &str) -> Self {
        let root = ActorPath::root(Address::local(system.name()));
        let myself = root.descendant(path.split('/'));
        Self {
            system: system.clone(),
            myself: ActorRef::new(TestActorRef::new(myself)),
            root: ActorRef::new(TestActorRef::new(root)),
            spawned: Vec::new(),
            selections: AtomicUsize::new(0),
            fail_spawn: false,
        }
    }

    pub(crate) fn with_failing_spawn(mut self) -> Self {
        self.fail_spawn = true;
        self
    }

    pub(crate) fn spawned(&self) -> &[Props] {
        &self.spawned
    }

    pub(crate) fn selection_count(&self) -> usize {
        self.selections.load(Ordering::Relaxed)
    }
}

impl ActorRefFactory for TestContext {
    fn system(&self) -> &ActorSystem {
        &self.system
    }

    fn lookup_root(&self) -> ActorRef {
        self.root.clone()
    }

    fn spawn_anonymous_actor(&mut self, props: Props) -> anyhow::Result<ActorRef> {
        if self.fail_spawn {
            return Err(anyhow!("spawn of {} refused", props.name()));
        }
        let name = format!("${}", self.spawned.len());
        let path = self.myself.path().child(&name);
        self.spawned.push(props);
        Ok(ActorRef::new(TestActorRef::new(path)))
    }

    fn actor_selection(&self, path: &str) -> anyhow::Result<ActorSelection> {
        self.selections.fetch_add(1, Ordering::Relaxed);
        let SelectionPath { anchor, elements } = path.parse()?;
        let anchor = match anchor {
            SelectionAnchor::Root(root) => ActorRef::new(TestActorRef::new(root)),
            SelectionAnchor::LocalRoot => self.lookup_root(),
            SelectionAnchor::Relative => self.myself.clone(),
        };
        Ok(ActorSelection::new(anchor, elements.iter().map(|e| e.as_str())))
    }
}

impl ActorContext for TestContext {
    fn myself(&self) -> &ActorRef {
        &self.myself
    }
}
