//! JSON team definitions

use std::path::Path;

use serde::{Deserialize, Serialize};
use tussle_battle::{Controller, Creature, Item, ItemEffect, Move, Roster, Status, Type};

use crate::dex::MoveDex;
use crate::error::TeamError;

fn one() -> u8 {
    1
}

fn parse_type(name: &str) -> Result<Type, TeamError> {
    Type::from_name(name).ok_or_else(|| TeamError::UnknownType(name.to_string()))
}

/// A whole team file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,

    #[serde(default)]
    pub controller: Controller,

    /// Moves shared by the team's creatures, referenced by name
    #[serde(default)]
    pub moves: Vec<MoveSpec>,

    pub creatures: Vec<CreatureSpec>,

    #[serde(default)]
    pub items: Vec<ItemSpec>,

    /// Name of the creature to lead with. Defaults to the first conscious one.
    #[serde(default)]
    pub lead: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub level: u8,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,

    #[serde(default)]
    pub moves: Vec<MoveRef>,
}

/// A move given by name (already in the dex) or defined in place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveRef {
    Name(String),
    Inline(MoveSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub power: u32,

    #[serde(default = "one")]
    pub min_level: u8,

    #[serde(default = "one")]
    pub max_hits: u8,

    /// Percent of power taken back as recoil
    #[serde(default)]
    pub recoil: u8,

    /// Percent of max HP restored to the user
    #[serde(default)]
    pub healing: u8,

    #[serde(default)]
    pub inflicts: Option<InflictSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflictSpec {
    pub status: Status,
    pub chance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,

    #[serde(flatten)]
    pub effect: ItemEffect,
}

impl MoveSpec {
    /// Single-hit move with no side effects
    pub fn new(name: impl Into<String>, kind: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            power,
            min_level: 1,
            max_hits: 1,
            recoil: 0,
            healing: 0,
            inflicts: None,
        }
    }

    pub fn to_move(&self) -> Result<Move, TeamError> {
        let mut mv = Move::new(self.name.trim(), parse_type(&self.kind)?, self.power)
            .min_level(self.min_level)
            .max_hits(self.max_hits)
            .recoil(self.recoil)
            .healing(self.healing);
        if let Some(inflict) = self.inflicts {
            mv = mv.inflicts(inflict.status, inflict.chance);
        }
        Ok(mv)
    }
}

impl TeamSpec {
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TeamError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TeamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build a battle-ready roster, interning moves through `dex`
    pub fn build(&self, dex: &mut MoveDex) -> Result<Roster, TeamError> {
        for spec in &self.moves {
            dex.define(spec)?;
        }

        let mut roster = Roster::new(self.name.clone(), self.controller);

        for spec in &self.creatures {
            let mut creature = Creature::new(
                spec.name.clone(),
                parse_type(&spec.kind)?,
                spec.level,
                spec.hp,
                spec.attack,
                spec.defense,
            );
            for reference in &spec.moves {
                creature.learn_move(dex.resolve(reference)?)?;
            }
            roster.add_creature(creature)?;
        }

        for item in &self.items {
            roster.add_item(Item::new(item.name.clone(), item.effect));
        }

        let lead = match &self.lead {
            Some(name) => roster.position(name),
            None => roster.first_alive(),
        };
        match lead {
            Some(slot) if roster.set_active(slot) => Ok(roster),
            _ => Err(TeamError::NoActive(self.name.clone())),
        }
    }
}
