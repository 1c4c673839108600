//! Team definition format for tussle battles.
//!
//! Teams are written as JSON and turned into [`Roster`]s ready for a
//! [`tussle_battle::BattleSession`]. Moves are interned through a [`MoveDex`]
//! so every creature using "Ember" holds the same `Arc<Move>`, across teams too
//! when the same dex builds both.
//!
//! ```json
//! {
//!   "name": "Blaine",
//!   "controller": "automated",
//!   "moves": [{ "name": "Ember", "type": "fire", "power": 40 }],
//!   "creatures": [
//!     { "name": "Growlithe", "type": "fire", "level": 25, "hp": 90,
//!       "attack": 70, "defense": 45, "moves": ["Ember"] }
//!   ],
//!   "items": [{ "name": "Potion", "effect": "heal", "amount": 20 }]
//! }
//! ```

mod dex;
mod error;
mod spec;

pub use dex::MoveDex;
pub use error::TeamError;
pub use spec::{CreatureSpec, InflictSpec, ItemSpec, MoveRef, MoveSpec, TeamSpec};

pub use tussle_battle::Roster;
