//! Creature types and the sparse effectiveness chart

/// Creature types (18 fixed elements)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Damage multiplier of an attack of this type against a defending type.
    ///
    /// Pairs missing from [`TYPE_CHART`] are neutral (1.0).
    pub fn effectiveness(self, defender: Type) -> f32 {
        chart_entry(self, defender).unwrap_or(1.0)
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up an explicitly listed (attack, defense) pair
pub fn chart_entry(attack: Type, defense: Type) -> Option<f32> {
    TYPE_CHART
        .iter()
        .find(|(a, d, _)| *a == attack && *d == defense)
        .map(|(_, _, mult)| *mult)
}

/// Sparse effectiveness chart: (attacking type, defending type, multiplier).
///
/// Only non-neutral matchups are listed. Values are 0.0 (immune),
/// 0.5 (not very effective) or 2.0 (super effective).
#[rustfmt::skip]
pub static TYPE_CHART: &[(Type, Type, f32)] = &[
    // Normal
    (Type::Normal, Type::Rock, 0.5),
    (Type::Normal, Type::Ghost, 0.0),
    (Type::Normal, Type::Steel, 0.5),
    // Fire
    (Type::Fire, Type::Fire, 0.5),
    (Type::Fire, Type::Water, 0.5),
    (Type::Fire, Type::Grass, 2.0),
    (Type::Fire, Type::Ice, 2.0),
    (Type::Fire, Type::Bug, 2.0),
    (Type::Fire, Type::Rock, 0.5),
    (Type::Fire, Type::Dragon, 0.5),
    (Type::Fire, Type::Steel, 2.0),
    // Water
    (Type::Water, Type::Fire, 2.0),
    (Type::Water, Type::Water, 0.5),
    (Type::Water, Type::Grass, 0.5),
    (Type::Water, Type::Ground, 2.0),
    (Type::Water, Type::Rock, 2.0),
    (Type::Water, Type::Dragon, 0.5),
    // Electric
    (Type::Electric, Type::Water, 2.0),
    (Type::Electric, Type::Electric, 0.5),
    (Type::Electric, Type::Grass, 0.5),
    (Type::Electric, Type::Ground, 0.0),
    (Type::Electric, Type::Flying, 2.0),
    (Type::Electric, Type::Dragon, 0.5),
    // Grass
    (Type::Grass, Type::Fire, 0.5),
    (Type::Grass, Type::Water, 2.0),
    (Type::Grass, Type::Grass, 0.5),
    (Type::Grass, Type::Poison, 0.5),
    (Type::Grass, Type::Ground, 2.0),
    (Type::Grass, Type::Flying, 0.5),
    (Type::Grass, Type::Bug, 0.5),
    (Type::Grass, Type::Rock, 2.0),
    (Type::Grass, Type::Dragon, 0.5),
    (Type::Grass, Type::Steel, 0.5),
    // Ice
    (Type::Ice, Type::Fire, 0.5),
    (Type::Ice, Type::Water, 0.5),
    (Type::Ice, Type::Grass, 2.0),
    (Type::Ice, Type::Ice, 0.5),
    (Type::Ice, Type::Ground, 2.0),
    (Type::Ice, Type::Flying, 2.0),
    (Type::Ice, Type::Dragon, 2.0),
    (Type::Ice, Type::Steel, 0.5),
    // Fighting
    (Type::Fighting, Type::Normal, 2.0),
    (Type::Fighting, Type::Ice, 2.0),
    (Type::Fighting, Type::Poison, 0.5),
    (Type::Fighting, Type::Flying, 0.5),
    (Type::Fighting, Type::Psychic, 0.5),
    (Type::Fighting, Type::Bug, 0.5),
    (Type::Fighting, Type::Rock, 2.0),
    (Type::Fighting, Type::Ghost, 0.0),
    (Type::Fighting, Type::Dark, 2.0),
    (Type::Fighting, Type::Steel, 2.0),
    (Type::Fighting, Type::Fairy, 0.5),
    // Poison
    (Type::Poison, Type::Grass, 2.0),
    (Type::Poison, Type::Poison, 0.5),
    (Type::Poison, Type::Ground, 0.5),
    (Type::Poison, Type::Rock, 0.5),
    (Type::Poison, Type::Ghost, 0.5),
    (Type::Poison, Type::Steel, 0.0),
    (Type::Poison, Type::Fairy, 2.0),
    // Ground
    (Type::Ground, Type::Fire, 2.0),
    (Type::Ground, Type::Electric, 2.0),
    (Type::Ground, Type::Grass, 0.5),
    (Type::Ground, Type::Poison, 2.0),
    (Type::Ground, Type::Flying, 0.0),
    (Type::Ground, Type::Bug, 0.5),
    (Type::Ground, Type::Rock, 2.0),
    (Type::Ground, Type::Steel, 2.0),
    // Flying
    (Type::Flying, Type::Electric, 0.5),
    (Type::Flying, Type::Grass, 2.0),
    (Type::Flying, Type::Fighting, 2.0),
    (Type::Flying, Type::Bug, 2.0),
    (Type::Flying, Type::Rock, 0.5),
    (Type::Flying, Type::Steel, 0.5),
    // Psychic
    (Type::Psychic, Type::Fighting, 2.0),
    (Type::Psychic, Type::Poison, 2.0),
    (Type::Psychic, Type::Psychic, 0.5),
    (Type::Psychic, Type::Dark, 0.0),
    (Type::Psychic, Type::Steel, 0.5),
    // Bug
    (Type::Bug, Type::Fire, 0.5),
    (Type::Bug, Type::Grass, 2.0),
    (Type::Bug, Type::Fighting, 0.5),
    (Type::Bug, Type::Poison, 0.5),
    (Type::Bug, Type::Flying, 0.5),
    (Type::Bug, Type::Psychic, 2.0),
    (Type::Bug, Type::Ghost, 0.5),
    (Type::Bug, Type::Dark, 2.0),
    (Type::Bug, Type::Steel, 0.5),
    (Type::Bug, Type::Fairy, 0.5),
    // Rock
    (Type::Rock, Type::Fire, 2.0),
    (Type::Rock, Type::Ice, 2.0),
    (Type::Rock, Type::Fighting, 0.5),
    (Type::Rock, Type::Ground, 0.5),
    (Type::Rock, Type::Flying, 2.0),
    (Type::Rock, Type::Bug, 2.0),
    (Type::Rock, Type::Steel, 0.5),
    // Ghost
    (Type::Ghost, Type::Normal, 0.0),
    (Type::Ghost, Type::Psychic, 2.0),
    (Type::Ghost, Type::Ghost, 2.0),
    (Type::Ghost, Type::Dark, 0.5),
    // Dragon
    (Type::Dragon, Type::Dragon, 2.0),
    (Type::Dragon, Type::Steel, 0.5),
    (Type::Dragon, Type::Fairy, 0.0),
    // Dark
    (Type::Dark, Type::Fighting, 0.5),
    (Type::Dark, Type::Psychic, 2.0),
    (Type::Dark, Type::Ghost, 2.0),
    (Type::Dark, Type::Dark, 0.5),
    (Type::Dark, Type::Fairy, 0.5),
    // Steel
    (Type::Steel, Type::Fire, 0.5),
    (Type::Steel, Type::Water, 0.5),
    (Type::Steel, Type::Electric, 0.5),
    (Type::Steel, Type::Ice, 2.0),
    (Type::Steel, Type::Rock, 2.0),
    (Type::Steel, Type::Steel, 0.5),
    (Type::Steel, Type::Fairy, 2.0),
    // Fairy
    (Type::Fairy, Type::Fire, 0.5),
    (Type::Fairy, Type::Fighting, 2.0),
    (Type::Fairy, Type::Poison, 0.5),
    (Type::Fairy, Type::Dragon, 2.0),
    (Type::Fairy, Type::Dark, 2.0),
    (Type::Fairy, Type::Steel, 0.5),
];
