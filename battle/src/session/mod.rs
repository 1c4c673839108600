//! Battle session: turn state machine, action validation and turn input

mod action;
mod battle;
pub mod validator;

pub use action::{Action, AutoInput, Side, TurnInput};
pub use battle::{AttackReport, BattleSession, Phase, TurnOutcome};
