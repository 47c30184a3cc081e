use crate::message::{Message, RouterManagementMessage};
use crate::routing::routee::Routee;

/// Ask the router for its current routees, answered with [`Routees`].
#[derive(Debug, Copy, Clone)]
pub struct GetRoutees;

impl Message for GetRoutees {}

impl RouterManagementMessage for GetRoutees {}

#[derive(Debug, Clone)]
pub struct Routees {
    pub routees: Vec<Routee>,
}

impl Message for Routees {}

#[derive(Debug, Clone)]
pub struct AddRoutee {
    pub routee: Routee,
}

impl Message for AddRoutee {}

impl RouterManagementMessage for AddRoutee {}

/// Removing a pool routee also stops it, group routees are only forgotten.
#[derive(Debug, Clone)]
pub struct RemoveRoutee {
    pub routee: Routee,
}

impl Message for RemoveRoutee {}

impl RouterManagementMessage for RemoveRoutee {}

/// Grow (positive) or shrink (negative) a pool by `change` routees.
#[derive(Debug, Copy, Clone)]
pub struct AdjustPoolSize {
    pub change: i32,
}

impl Message for AdjustPoolSize {}

impl RouterManagementMessage for AdjustPoolSize {}
