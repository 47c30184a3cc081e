use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dyn_clone::DynClone;

use crate::actor::actor_ref::ActorRef;

pub type Decider = Arc<dyn Fn(&anyhow::Error) -> Directive + Send + Sync>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Directive {
    Resume,
    Restart,
    Stop,
    Escalate,
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Directive::Resume => {
                write!(f, "Resume")
            }
            Directive::Restart => {
                write!(f, "Restart")
            }
            Directive::Stop => {
                write!(f, "Stop")
            }
            Directive::Escalate => {
                write!(f, "Escalate")
            }
        }
    }
}

/// Fault-handling policy a parent applies to a failing child.
pub trait SupervisorStrategy: Debug + Send + Sync + DynClone + 'static {
    fn decider(&self) -> &Decider;

    /// Negative means unlimited.
    fn max_nr_of_retries(&self) -> i32;

    fn within_time_range(&self) -> Option<Duration>;

    /// Directive applied when the decider asks for a restart the retry budget
    /// no longer allows.
    fn retries_exhausted(&self) -> Directive;

    /// Children the directive for `failed` applies to.
    fn affected_children(&self, failed: &ActorRef, children: &[ActorRef]) -> Vec<ActorRef>;

    fn decide(&self, error: &anyhow::Error) -> Directive {
        (self.decider())(error)
    }

    fn retries_window(&self) -> (Option<i32>, Option<i32>) {
        (
            max_nr_or_retries_option(self.max_nr_of_retries()),
            within_time_range_option(self.within_time_range()).map(|r| i32::try_from(r.as_millis()).unwrap_or(i32::MAX)),
        )
    }

    fn handle_failure(&self, stats: &mut ChildRestartStats, error: &anyhow::Error) -> Directive {
        match self.decide(error) {
            Directive::Restart => {
                if stats.request_restart_permission(self.retries_window()) {
                    Directive::Restart
                } else {
                    self.retries_exhausted()
                }
            }
            directive => directive,
        }
    }
}

dyn_clone::clone_trait_object!(SupervisorStrategy);

/// Restart bookkeeping for one child. Each child owns its own stats so a
/// failing routee never consumes the budget of its siblings.
#[derive(Debug, Default, Clone)]
pub struct ChildRestartStats {
    pub(crate) max_nr_of_retries_count: i32,
    pub(crate) restart_time_window_start: Option<Instant>,
}

impl ChildRestartStats {
    pub fn request_restart_permission(&mut self, retries_window: (Option<i32>, Option<i32>)) -> bool {
        match retries_window {
            (Some(retries), _) if retries < 1 => false,
            (Some(retries), None) => {
                self.max_nr_of_retries_count += 1;
                self.max_nr_of_retries_count <= retries
            }
            (x, Some(window)) => self.retries_in_window_okay(x.unwrap_or(1), window),
            (None, _) => true,
        }
    }

    pub fn retries_in_window_okay(&mut self, retries: i32, window: i32) -> bool {
        let retries_done = self.max_nr_of_retries_count + 1;
        let now = Instant::now();
        let window_start = *self.restart_time_window_start.get_or_insert(now);
        let inside_window = now.duration_since(window_start) <= Duration::from_millis(window as u64);
        if inside_window {
            self.max_nr_of_retries_count = retries_done;
            retries_done <= retries
        } else {
            self.max_nr_of_retries_count = 1;
            self.restart_time_window_start = Some(now);
            true
        }
    }
}

#[derive(Clone)]
pub struct OneForOneStrategy {
    pub max_nr_of_retries: i32,
    pub within_time_range: Option<Duration>,
    pub decider: Decider,
    pub retries_exhausted: Directive,
}

impl OneForOneStrategy {
    pub fn new<F>(max_nr_of_retries: i32, within_time_range: Option<Duration>, decider: F) -> Self
        where
            F: Fn(&anyhow::Error) -> Directive + Send + Sync + 'static,
    {
        Self {
            max_nr_of_retries,
            within_time_range,
            decider: Arc::new(decider),
            retries_exhausted: Directive::Stop,
        }
    }

    pub fn with_retries_exhausted(mut self, directive: Directive) -> Self {
        self.retries_exhausted = directive;
        self
    }
}

impl Default for OneForOneStrategy {
    fn default() -> Self {
        Self::new(-1, None, default_decider)
    }
}

impl Debug for OneForOneStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneForOneStrategy")
            .field("max_nr_of_retries", &self.max_nr_of_retries)
            .field("within_time_range", &self.within_time_range)
            .field("retries_exhausted", &self.retries_exhausted)
            .finish_non_exhaustive()
    }
}

impl SupervisorStrategy for OneForOneStrategy {
    fn decider(&self) -> &Decider {
        &self.decider
    }

    fn max_nr_of_retries(&self) -> i32 {
        self.max_nr_of_retries
    }

    fn within_time_range(&self) -> Option<Duration> {
        self.within_time_range
    }

    fn retries_exhausted(&self) -> Directive {
        self.retries_exhausted
    }

    fn affected_children(&self, failed: &ActorRef, _children: &[ActorRef]) -> Vec<ActorRef> {
        vec![failed.clone()]
    }
}

#[derive(Clone)]
pub struct AllForOneStrategy {
    pub max_nr_of_retries: i32,
    pub within_time_range: Option<Duration>,
    pub decider: Decider,
    pub retries_exhausted: Directive,
}

impl AllForOneStrategy {
    pub fn new<F>(max_nr_of_retries: i32, within_time_range: Option<Duration>, decider: F) -> Self
        where
            F: Fn(&anyhow::Error) -> Directive + Send + Sync + 'static,
    {
        Self {
            max_nr_of_retries,
            within_time_range,
            decider: Arc::new(decider),
            retries_exhausted: Directive::Stop,
        }
    }
}

impl Debug for AllForOneStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllForOneStrategy")
            .field("max_nr_of_retries", &self.max_nr_of_retries)
            .field("within_time_range", &self.within_time_range)
            .field("retries_exhausted", &self.retries_exhausted)
            .finish_non_exhaustive()
    }
}

impl SupervisorStrategy for AllForOneStrategy {
    fn decider(&self) -> &Decider {
        &self.decider
    }

    fn max_nr_of_retries(&self) -> i32 {
        self.max_nr_of_retries
    }

    fn within_time_range(&self) -> Option<Duration> {
        self.within_time_range
    }

    fn retries_exhausted(&self) -> Directive {
        self.retries_exhausted
    }

    fn affected_children(&self, _failed: &ActorRef, children: &[ActorRef]) -> Vec<ActorRef> {
        children.to_vec()
    }
}

pub fn default_decider(_error: &anyhow::Error) -> Directive {
    Directive::Restart
}

pub fn default_strategy() -> Box<dyn SupervisorStrategy> {
    Box::new(OneForOneStrategy::default())
}

pub fn stopping_strategy() -> Box<dyn SupervisorStrategy> {
    Box::new(OneForOneStrategy::new(-1, None, |_| Directive::Stop))
}

/// Strategy a pool router applies to its routees unless told otherwise:
/// each routee may be restarted 10 times within 10 seconds, after that the
/// failure is escalated to the router's parent.
pub fn default_pool_strategy() -> Box<dyn SupervisorStrategy> {
    let strategy = OneForOneStrategy::new(10, Some(Duration::from_secs(10)), default_decider)
        .with_retries_exhausted(Directive::Escalate);
    Box::new(strategy)
}

fn max_nr_or_retries_option(max_nr_or_retries: i32) -> Option<i32> {
    if max_nr_or_retries < 0 { None } else { Some(max_nr_or_retries) }
}

fn within_time_range_option(within_time_range: Option<Duration>) -> Option<Duration> {
    match within_time_range {
        Some(within_time_range) if within_time_range > Duration::ZERO => {
            Some(within_time_range)
        }
        _ => {
            None
        }
    }
}
