//! Consumable items

use super::creature::Creature;
use crate::error::{BattleError, Result};

/// What an item does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "effect", rename_all = "lowercase"))]
pub enum ItemEffect {
    /// Restore a flat amount of HP to a conscious creature
    Heal { amount: u32 },

    /// Bring a fainted creature back with a share of its max HP
    Revive { hp_percent: u8 },
}

/// An item in a roster's inventory. Consumed on use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }

    pub fn potion(name: impl Into<String>, amount: u32) -> Self {
        Self::new(name, ItemEffect::Heal { amount })
    }

    pub fn revive(name: impl Into<String>, hp_percent: u8) -> Self {
        Self::new(
            name,
            ItemEffect::Revive {
                hp_percent: hp_percent.min(100),
            },
        )
    }

    /// Whether the item restores HP to a conscious creature
    pub fn is_healing(&self) -> bool {
        matches!(self.effect, ItemEffect::Heal { .. })
    }

    /// Check the item can be used on `target` without using it
    pub fn check(&self, target: &Creature) -> Result<()> {
        match self.effect {
            ItemEffect::Heal { .. } if target.is_fainted() => Err(BattleError::InvalidOperation(
                format!("{} cannot be used on fainted {}", self.name, target.name()),
            )),
            ItemEffect::Revive { .. } if !target.is_fainted() => {
                Err(BattleError::InvalidOperation(format!(
                    "{} can only be used on a fainted creature, {} is conscious",
                    self.name,
                    target.name()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Apply the effect to `target`. Returns the HP restored.
    pub fn apply(&self, target: &mut Creature) -> u32 {
        match self.effect {
            ItemEffect::Heal { amount } => target.heal(amount),
            ItemEffect::Revive { hp_percent } => {
                let hp = u64::from(target.max_hp()) * u64::from(hp_percent) / 100;
                target.revive(hp as u32)
            }
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
