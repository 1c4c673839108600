//! Creature combat state

use std::sync::Arc;

use rand::Rng;

use super::creature_type::Type;
use super::moves::Move;
use super::status::{Status, StatusCondition, StatusTick};
use crate::config::StatusConfig;
use crate::error::MovepoolError;

/// Most moves a creature can know at once
pub const MAX_MOVES: usize = 4;

/// A creature taking part in battle.
///
/// HP only changes through [`take_damage`](Self::take_damage),
/// [`heal`](Self::heal) and [`revive`](Self::revive), so it always stays
/// within `0..=max_hp`.
#[derive(Debug, Clone)]
pub struct Creature {
    name: String,
    kind: Type,
    level: u8,

    // === HP ===
    hp: u32,
    max_hp: u32,

    // === Stats ===
    attack: u32,
    defense: u32,

    movepool: Vec<Arc<Move>>,
    condition: StatusCondition,
}

impl Creature {
    /// Create a creature at full HP. Level and max HP are raised to at least 1.
    pub fn new(
        name: impl Into<String>,
        kind: Type,
        level: u8,
        max_hp: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            kind,
            level: level.max(1),
            hp: max_hp,
            max_hp,
            attack,
            defense,
            movepool: Vec::with_capacity(MAX_MOVES),
            condition: StatusCondition::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Type {
        self.kind
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        ((u64::from(self.hp) * 100) / u64::from(self.max_hp)) as u32
    }

    /// Check if the creature has fainted
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    // === Moves ===

    /// Known moves in learn order
    pub fn moves(&self) -> &[Arc<Move>] {
        &self.movepool
    }

    /// Whether this exact move (by identity) is in the movepool
    pub fn knows(&self, mv: &Arc<Move>) -> bool {
        self.movepool.iter().any(|known| Arc::ptr_eq(known, mv))
    }

    /// Add a move to the movepool. Any type may be learned once the
    /// creature reaches the move's level.
    pub fn learn_move(&mut self, mv: Arc<Move>) -> Result<(), MovepoolError> {
        if self.knows(&mv) || self.movepool.iter().any(|known| known.name() == mv.name()) {
            return Err(MovepoolError::AlreadyKnown {
                creature: self.name.clone(),
                name: mv.name().to_string(),
            });
        }
        if self.movepool.len() >= MAX_MOVES {
            return Err(MovepoolError::Full {
                creature: self.name.clone(),
            });
        }
        if self.level < mv.required_level() {
            return Err(MovepoolError::LevelTooLow {
                creature: self.name.clone(),
                name: mv.name().to_string(),
                required: mv.required_level(),
            });
        }
        self.movepool.push(mv);
        Ok(())
    }

    // === HP changes ===

    /// Lose HP, saturating at 0. Fainting clears any status.
    /// Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        if self.hp == 0 {
            self.condition.cure();
        }
        lost
    }

    /// Restore HP up to max. Fainted creatures are not affected.
    /// Returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.is_fainted() {
            return 0;
        }
        let gained = amount.min(self.max_hp - self.hp);
        self.hp += gained;
        gained
    }

    /// Bring a fainted creature back with `hp` (at least 1, at most max).
    /// Returns the HP restored, 0 if the creature was not fainted.
    pub fn revive(&mut self, hp: u32) -> u32 {
        if !self.is_fainted() {
            return 0;
        }
        self.hp = hp.clamp(1, self.max_hp);
        self.hp
    }

    // === Status ===

    pub fn status(&self) -> Option<Status> {
        self.condition.current()
    }

    pub fn condition(&self) -> &StatusCondition {
        &self.condition
    }

    /// Inflict a status. No-op (returns false) if already afflicted or fainted.
    pub fn inflict_status(&mut self, status: Status) -> bool {
        if self.is_fainted() {
            return false;
        }
        self.condition.inflict(status)
    }

    pub fn cure_status(&mut self) {
        self.condition.cure();
    }

    pub fn set_sleep_duration(&mut self, turns: u32) {
        self.condition.set_sleep_duration(turns);
    }

    /// Run one status tick and apply its damage
    pub fn apply_status_effects<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &StatusConfig,
    ) -> StatusTick {
        let mut tick = self.condition.apply(self.max_hp, rng, config);
        tick.damage = self.take_damage(tick.damage);
        tick
    }
}
