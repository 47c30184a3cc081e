use crate::actor::actor_ref::ActorRef;
use crate::message::{AutoReceivedMessage, Message};

#[derive(Debug, Copy, Clone)]
pub struct PoisonPill;

impl Message for PoisonPill {}

impl AutoReceivedMessage for PoisonPill {}

#[derive(Debug, Copy, Clone)]
pub struct Kill;

impl Message for Kill {}

impl AutoReceivedMessage for Kill {}

#[derive(Debug, Clone)]
pub struct Identify {
    pub message_id: String,
}

impl Message for Identify {}

impl AutoReceivedMessage for Identify {}

#[derive(Debug, Clone)]
pub struct Terminated {
    pub actor: ActorRef,
    pub existence_confirmed: bool,
    pub address_terminated: bool,
}

impl Message for Terminated {}

impl AutoReceivedMessage for Terminated {}
