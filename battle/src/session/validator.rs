//! Action legality checks. Nothing in here mutates state.

use std::sync::Arc;

use crate::error::{BattleError, Result};
use crate::types::{Creature, Move, Roster};

/// The acting creature must be present, conscious, and know this exact move
pub fn validate_move(active: Option<&Creature>, mv: &Arc<Move>) -> Result<()> {
    let Some(creature) = active else {
        return Err(BattleError::InvalidOperation(format!(
            "no active creature to use {}",
            mv.name()
        )));
    };

    if creature.is_fainted() {
        return Err(BattleError::InvalidMove(format!(
            "{} has fainted and cannot use {}",
            creature.name(),
            mv.name()
        )));
    }

    if !creature.knows(mv) {
        return Err(BattleError::InvalidMove(format!(
            "{} does not know {}",
            creature.name(),
            mv.name()
        )));
    }

    Ok(())
}

/// The target slot must be owned by the roster, conscious, and not already active
pub fn validate_switch(roster: &Roster, slot: usize) -> Result<()> {
    let target = roster.creature(slot).ok_or_else(|| {
        BattleError::InvalidSwitch(format!("{} has no creature in slot {}", roster.name(), slot))
    })?;

    if target.is_fainted() {
        return Err(BattleError::InvalidSwitch(format!(
            "{} has fainted",
            target.name()
        )));
    }

    if roster.active_slot() == Some(slot) {
        return Err(BattleError::InvalidSwitch(format!(
            "{} is already active",
            target.name()
        )));
    }

    Ok(())
}

/// The item and target must exist in the roster and the item must apply to the target
pub fn validate_item(roster: &Roster, item: usize, target: usize) -> Result<()> {
    let item = roster
        .items()
        .get(item)
        .ok_or(BattleError::MissingParticipant("item"))?;
    let target = roster
        .creature(target)
        .ok_or(BattleError::MissingParticipant("target creature"))?;

    item.check(target)
}
