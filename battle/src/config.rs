//! Tunable battle constants

/// Damage formula tunables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageConfig {
    /// Probability of a critical hit (0.0-1.0)
    pub critical_chance: f64,

    /// Multiplier applied on a critical hit
    pub critical_multiplier: f64,

    /// Same-type attack bonus
    pub stab_bonus: f64,

    /// Lower bound of the random spread factor
    pub spread_min: f64,

    /// Upper bound of the random spread factor (inclusive)
    pub spread_max: f64,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            critical_chance: 1.0 / 16.0,
            critical_multiplier: 2.0,
            stab_bonus: 1.5,
            spread_min: 0.85,
            spread_max: 1.0,
        }
    }
}

impl DamageConfig {
    /// Config with no critical hits and no spread, for reproducible numbers
    pub fn fixed() -> Self {
        Self {
            critical_chance: 0.0,
            spread_min: 1.0,
            spread_max: 1.0,
            ..Self::default()
        }
    }
}

/// Status condition tunables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusConfig {
    /// Burn deals max HP / this each tick
    pub burn_divisor: u32,

    /// Poison deals max HP / this each tick
    pub poison_divisor: u32,

    /// Chance a paralyzed creature cannot move
    pub paralysis_chance: f64,

    /// Chance a frozen creature thaws on a tick
    pub thaw_chance: f64,

    /// Longest sleep a move can inflict, in turns
    pub max_sleep_turns: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            burn_divisor: 16,
            poison_divisor: 8,
            paralysis_chance: 0.25,
            thaw_chance: 0.2,
            max_sleep_turns: 3,
        }
    }
}

/// Top-level battle configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub damage: DamageConfig,
    pub status: StatusConfig,

    /// Number of action descriptions kept in the session history
    pub history_len: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            damage: DamageConfig::default(),
            status: StatusConfig::default(),
            history_len: 4,
        }
    }
}

impl BattleConfig {
    /// Name of the first probability or multiplier that is NaN or infinite
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("damage.critical_chance", self.damage.critical_chance),
            ("damage.critical_multiplier", self.damage.critical_multiplier),
            ("damage.stab_bonus", self.damage.stab_bonus),
            ("damage.spread_min", self.damage.spread_min),
            ("damage.spread_max", self.damage.spread_max),
            ("status.paralysis_chance", self.status.paralysis_chance),
            ("status.thaw_chance", self.status.thaw_chance),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}
