//! Move definitions

use super::creature::Creature;
use super::creature_type::Type;
use super::status::Status;

/// Chance for a move to inflict a status on the defender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfliction {
    pub status: Status,

    /// Percent chance (0-100) per successful use
    pub chance: u8,
}

/// A move a creature can use. Immutable once built; shared between
/// creatures as `Arc<Move>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    name: String,
    kind: Type,
    power: u32,
    min_level: u8,
    max_hits: u8,
    recoil_percent: u8,
    healing_percent: u8,
    inflicts: Option<StatusInfliction>,
}

impl Move {
    /// Create a single-hit move with no side effects
    pub fn new(name: impl Into<String>, kind: Type, power: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            power,
            min_level: 1,
            max_hits: 1,
            recoil_percent: 0,
            healing_percent: 0,
            inflicts: None,
        }
    }

    /// Minimum level required to use the move
    pub fn min_level(mut self, level: u8) -> Self {
        self.min_level = level;
        self
    }

    /// Upper bound of hits per use (at least 1)
    pub fn max_hits(mut self, hits: u8) -> Self {
        self.max_hits = hits.max(1);
        self
    }

    /// Recoil as a percentage of the move's power (0-100)
    pub fn recoil(mut self, percent: u8) -> Self {
        self.recoil_percent = percent.min(100);
        self
    }

    /// Healing as a percentage of the user's max HP (0-100)
    pub fn healing(mut self, percent: u8) -> Self {
        self.healing_percent = percent.min(100);
        self
    }

    /// Chance to inflict a status on hit
    pub fn inflicts(mut self, status: Status, chance: u8) -> Self {
        self.inflicts = Some(StatusInfliction {
            status,
            chance: chance.min(100),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Type {
        self.kind
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn required_level(&self) -> u8 {
        self.min_level
    }

    pub fn hits(&self) -> u8 {
        self.max_hits
    }

    pub fn recoil_percent(&self) -> u8 {
        self.recoil_percent
    }

    pub fn healing_percent(&self) -> u8 {
        self.healing_percent
    }

    pub fn status_infliction(&self) -> Option<StatusInfliction> {
        self.inflicts
    }

    /// A creature can learn a move of its own type once it reaches the move's level
    pub fn is_compatible_with(&self, creature: &Creature) -> bool {
        self.kind == creature.kind() && creature.level() >= self.min_level
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_defaults() {
        let mv = Move::new("Tackle", Type::Normal, 40);
        assert_eq!(mv.name(), "Tackle");
        assert_eq!(mv.power(), 40);
        assert_eq!(mv.required_level(), 1);
        assert_eq!(mv.hits(), 1);
        assert_eq!(mv.recoil_percent(), 0);
        assert_eq!(mv.healing_percent(), 0);
        assert!(mv.status_infliction().is_none());
    }

    #[test]
    fn test_builder_clamps() {
        let mv = Move::new("Odd", Type::Normal, 10)
            .max_hits(0)
            .recoil(150)
            .healing(200)
            .inflicts(Status::Burn, 120);
        assert_eq!(mv.hits(), 1);
        assert_eq!(mv.recoil_percent(), 100);
        assert_eq!(mv.healing_percent(), 100);
        assert_eq!(mv.status_infliction().map(|s| s.chance), Some(100));
    }

    #[test]
    fn test_compatibility() {
        let pikachu = Creature::new("Pikachu", Type::Electric, 10, 100, 55, 40);
        assert!(Move::new("Thunder Shock", Type::Electric, 40).is_compatible_with(&pikachu));
        assert!(!Move::new("Thunder", Type::Electric, 110)
            .min_level(30)
            .is_compatible_with(&pikachu));
        assert!(!Move::new("Surf", Type::Water, 90).is_compatible_with(&pikachu));
    }
}
