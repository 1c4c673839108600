//! Matchup helpers for decision making

use std::cmp::Reverse;
use std::sync::Arc;

use crate::types::{Creature, Move, Roster, Type};

/// Check if the creature is below half HP
pub fn needs_healing(creature: &Creature) -> bool {
    u64::from(creature.hp()) * 2 < u64::from(creature.max_hp())
}

/// Check if `active` should consider leaving the field: the opponent's type
/// hits it harder than 1.5x, or it is below a quarter HP
pub fn is_threatened(active: &Creature, opponent: &Creature) -> bool {
    let incoming = opponent.kind().effectiveness(active.kind());
    incoming > 1.5 || u64::from(active.hp()) * 4 < u64::from(active.max_hp())
}

/// Check if `candidate` takes reduced damage (<1x) from `attacking` moves
pub fn resists(candidate: &Creature, attacking: Type) -> bool {
    attacking.effectiveness(candidate.kind()) < 1.0
}

/// Expected value of a move against a defender: effectiveness times power
pub fn move_score(mv: &Move, defender: &Creature) -> f64 {
    f64::from(mv.kind().effectiveness(defender.kind())) * f64::from(mv.power())
}

/// Highest scoring move against `defender`, first in movepool order on ties
pub fn best_move<'c>(attacker: &'c Creature, defender: &Creature) -> Option<&'c Arc<Move>> {
    let mut best: Option<(&Arc<Move>, f64)> = None;
    for mv in attacker.moves() {
        let score = move_score(mv, defender);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Highest-level bench creature that resists `opponent`, first in roster
/// order on ties
pub fn best_switch(roster: &Roster, opponent: &Creature) -> Option<usize> {
    roster
        .bench()
        .filter(|(_, c)| resists(c, opponent.kind()))
        .min_by_key(|(_, c)| Reverse(c.level()))
        .map(|(slot, _)| slot)
}
