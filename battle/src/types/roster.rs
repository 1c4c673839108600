//! Roster (one party) state

use super::creature::Creature;
use super::item::Item;
use crate::error::RosterError;

/// Who picks a roster's actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Controller {
    /// Actions come from the built-in decision policy
    #[default]
    Automated,

    /// Actions come from an injected turn-input provider
    Manual,
}

/// One party's creatures, active slot and item bag
#[derive(Debug, Clone)]
pub struct Roster {
    name: String,
    controller: Controller,

    /// Creatures in ownership order
    creatures: Vec<Creature>,

    /// Index into `creatures` of the creature on the field
    active: Option<usize>,

    items: Vec<Item>,
}

impl Roster {
    /// Create an empty roster
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            controller,
            creatures: Vec::new(),
            active: None,
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_automated(&self) -> bool {
        self.controller == Controller::Automated
    }

    // === Creatures ===

    /// Add a creature. Names must be unique within the roster.
    /// Returns the new creature's slot.
    pub fn add_creature(&mut self, creature: Creature) -> Result<usize, RosterError> {
        if self.position(creature.name()).is_some() {
            return Err(RosterError::DuplicateCreature {
                roster: self.name.clone(),
                name: creature.name().to_string(),
            });
        }
        self.creatures.push(creature);
        Ok(self.creatures.len() - 1)
    }

    /// All creatures in ownership order
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Get a creature by slot
    pub fn creature(&self, slot: usize) -> Option<&Creature> {
        self.creatures.get(slot)
    }

    /// Get a creature by slot mutably
    pub fn creature_mut(&mut self, slot: usize) -> Option<&mut Creature> {
        self.creatures.get_mut(slot)
    }

    /// Find a creature's slot by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.creatures.iter().position(|c| c.name() == name)
    }

    /// Count non-fainted creatures
    pub fn alive_count(&self) -> usize {
        self.creatures.iter().filter(|c| !c.is_fainted()).count()
    }

    /// Whether any creature can still fight
    pub fn has_alive(&self) -> bool {
        self.creatures.iter().any(|c| !c.is_fainted())
    }

    /// First non-fainted creature in ownership order
    pub fn first_alive(&self) -> Option<usize> {
        self.creatures.iter().position(|c| !c.is_fainted())
    }

    /// Non-fainted, non-active creatures with their slots
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Creature)> {
        self.creatures
            .iter()
            .enumerate()
            .filter(move |(slot, c)| Some(*slot) != self.active && !c.is_fainted())
    }

    // === Active creature ===

    pub fn active_slot(&self) -> Option<usize> {
        self.active
    }

    /// The creature on the field
    pub fn active(&self) -> Option<&Creature> {
        self.active.and_then(|slot| self.creatures.get(slot))
    }

    /// The creature on the field, mutably
    pub fn active_mut(&mut self) -> Option<&mut Creature> {
        match self.active {
            Some(slot) => self.creatures.get_mut(slot),
            None => None,
        }
    }

    /// Put the creature at `slot` on the field. Returns false if the slot
    /// is not owned; callers validate faint state beforehand.
    pub fn set_active(&mut self, slot: usize) -> bool {
        if slot < self.creatures.len() {
            self.active = Some(slot);
            true
        } else {
            false
        }
    }

    /// Has a non-fainted creature and an active slot pointing at one
    pub fn is_battle_ready(&self) -> bool {
        self.active().is_some_and(|c| !c.is_fainted())
    }

    /// Replace a fainted active creature with the first non-fainted one in
    /// ownership order. Clears the active slot when none is left.
    /// Returns the new active slot.
    pub fn replace_fainted_active(&mut self) -> Option<usize> {
        if self.active().is_some_and(|c| !c.is_fainted()) {
            return self.active;
        }
        self.active = self.first_alive();
        self.active
    }

    // === Items ===

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Remove and return the item at `index`
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Index of the first healing item
    pub fn healing_item_index(&self) -> Option<usize> {
        self.items.iter().position(Item::is_healing)
    }
}
