//! Damage, recoil and healing formulas

use rand::Rng;

use crate::config::DamageConfig;
use crate::types::{Creature, Move};

/// Outcome of a single damage roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    pub damage: u32,
    pub effectiveness: f32,
    pub critical: bool,
    pub stab: bool,
}

/// Pure damage formulas. Randomness comes from the caller's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageCalculator {
    config: DamageConfig,
}

impl DamageCalculator {
    pub fn new(config: DamageConfig) -> Self {
        Self { config }
    }

    /// Roll damage for `mv` used by `attacker` against `defender`.
    ///
    /// `floor((((2L/5 + 2) * P * A/D) / 50 + 2) * eff * stab * crit * spread)`
    ///
    /// An immune matchup returns 0 without consuming any randomness.
    /// A defense of 0 is treated as 1.
    pub fn calculate_damage<R: Rng + ?Sized>(
        &self,
        attacker: &Creature,
        defender: &Creature,
        mv: &Move,
        rng: &mut R,
    ) -> DamageRoll {
        let effectiveness = mv.kind().effectiveness(defender.kind());
        let stab = attacker.kind() == mv.kind();

        if effectiveness == 0.0 {
            return DamageRoll {
                damage: 0,
                effectiveness,
                stab,
                critical: false,
            };
        }

        let level = f64::from(attacker.level());
        let power = f64::from(mv.power());
        let ratio = f64::from(attacker.attack()) / f64::from(defender.defense().max(1));
        let base = ((2.0 * level / 5.0 + 2.0) * power * ratio / 50.0) + 2.0;

        let critical = rng.gen_bool(self.config.critical_chance.clamp(0.0, 1.0));
        let spread = self.roll_spread(rng);

        let stab_mult = if stab { self.config.stab_bonus } else { 1.0 };
        let crit_mult = if critical {
            self.config.critical_multiplier
        } else {
            1.0
        };

        let raw = base * f64::from(effectiveness) * stab_mult * crit_mult * spread;

        DamageRoll {
            // `as` saturates: negative or NaN become 0, overflow becomes u32::MAX
            damage: raw.floor() as u32,
            effectiveness,
            critical,
            stab,
        }
    }

    fn roll_spread<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (min, max) = (self.config.spread_min, self.config.spread_max);
        if min >= max {
            min
        } else {
            rng.gen_range(min..=max)
        }
    }

    /// Recoil taken by the user: a share of the move's base power
    pub fn calculate_recoil_damage(&self, mv: &Move) -> u32 {
        (u64::from(mv.power()) * u64::from(mv.recoil_percent()) / 100) as u32
    }

    /// HP restored to the user: a share of its max HP
    pub fn calculate_healing_amount(&self, user: &Creature, mv: &Move) -> u32 {
        (u64::from(user.max_hp()) * u64::from(mv.healing_percent()) / 100) as u32
    }
}

/// Battle text for an effectiveness multiplier. Neutral hits return "".
pub fn effectiveness_message(multiplier: f32) -> &'static str {
    if multiplier > 1.0 {
        "It's super effective!"
    } else if multiplier == 0.0 {
        "It had no effect..."
    } else if multiplier < 1.0 {
        "It's not very effective..."
    } else {
        ""
    }
}
