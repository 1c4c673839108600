//! Decision making for automated rosters
//!
//! [`DecisionPolicy`] picks one action per turn in strict priority order:
//! heal a wounded active creature, retreat from a bad matchup, or attack
//! with the strongest move. The matchup helpers it uses are public so
//! other controllers can reuse them.

mod decision;
mod matchup;

pub use decision::DecisionPolicy;
pub use matchup::{best_move, best_switch, is_threatened, move_score, needs_healing, resists};
