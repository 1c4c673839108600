//! Priority-ordered action selection for automated rosters

use super::matchup::{best_move, best_switch, is_threatened, needs_healing};
use crate::session::Action;
use crate::types::Roster;

/// Picks the action for an automated roster.
///
/// Priority:
/// 1. active creature below half HP and a healing item in the bag: use it
/// 2. active creature threatened and a resisting creature on the bench:
///    switch to the highest-level one
/// 3. attack with the move maximizing effectiveness × power
/// 4. otherwise pass
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionPolicy;

impl DecisionPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn decide(&self, me: &Roster, opponent: &Roster) -> Action {
        let (Some(active), Some(active_slot)) = (me.active(), me.active_slot()) else {
            return Action::Pass;
        };

        if needs_healing(active)
            && let Some(item) = me.healing_item_index()
        {
            return Action::UseItem {
                item,
                target: active_slot,
            };
        }

        let Some(foe) = opponent.active() else {
            return Action::Pass;
        };

        if is_threatened(active, foe)
            && let Some(slot) = best_switch(me, foe)
        {
            return Action::Switch(slot);
        }

        match best_move(active, foe) {
            Some(mv) => Action::Attack(mv.clone()),
            None => Action::Pass,
        }
    }
}
