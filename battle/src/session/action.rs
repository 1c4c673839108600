//! Actions, sides and the turn-input seam

use std::sync::Arc;

use crate::policy::DecisionPolicy;
use crate::types::{Move, Roster};

/// One of the two rosters in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Array index for this side
    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::P1 => write!(f, "p1"),
            Side::P2 => write!(f, "p2"),
        }
    }
}

/// What a roster does with its turn
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Use a move from the active creature's movepool
    Attack(Arc<Move>),

    /// Send out the creature at this roster slot
    Switch(usize),

    /// Use the item at `item` in the bag on the creature at roster slot `target`
    UseItem { item: usize, target: usize },

    /// Do nothing this turn
    Pass,
}

/// Source of actions for manually controlled rosters.
///
/// The session hands over read-only views of both rosters and takes back
/// one action. An illegal action is rejected by the session without
/// changing any state.
pub trait TurnInput {
    fn choose_action(&mut self, me: &Roster, opponent: &Roster) -> Action;
}

impl<F> TurnInput for F
where
    F: FnMut(&Roster, &Roster) -> Action,
{
    fn choose_action(&mut self, me: &Roster, opponent: &Roster) -> Action {
        self(me, opponent)
    }
}

/// Drives a manual roster with the automated decision policy
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoInput {
    policy: DecisionPolicy,
}

impl AutoInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnInput for AutoInput {
    fn choose_action(&mut self, me: &Roster, opponent: &Roster) -> Action {
        self.policy.decide(me, opponent)
    }
}
