//! Domain types: creatures, moves, rosters, items and statuses

mod creature;
mod creature_type;
mod item;
mod moves;
mod roster;
mod status;

pub use creature::{Creature, MAX_MOVES};
pub use creature_type::{chart_entry, Type, TYPE_CHART};
pub use item::{Item, ItemEffect};
pub use moves::{Move, StatusInfliction};
pub use roster::{Controller, Roster};
pub use status::{Status, StatusCondition, StatusTick};
