//! Turn-based creature battle engine.
//!
//! This crate holds the domain types, damage math, status effects, automated
//! decision policy and the battle session state machine. It does no I/O:
//! randomness and logging are injected by the caller.
//!
//! # Overview
//!
//! ```text
//! tussle-team (JSON rosters)
//!        │
//!        ▼
//! tussle-battle (types + combat + session) ← THIS CRATE
//!        │
//!        ▼
//! tussle-arena (CLI runner)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Creature types with a sparse effectiveness chart
//! - [`Creature`] - HP, stats, movepool and status of one combatant
//! - [`Move`] - Built once and shared by `Arc` between creatures
//! - [`Roster`] - One side's creatures, active slot and item bag
//! - [`Item`] - Heal or revive items
//!
//! ## Battle
//! - [`BattleSession`] - Validates and resolves actions, tracks turns and history
//! - [`DamageCalculator`] - Damage, recoil and healing amounts
//! - [`DecisionPolicy`] - Action selection for automated rosters
//!
//! # Example Usage
//!
//! ```ignore
//! use rand::SeedableRng;
//! use tussle_battle::{AutoInput, BattleSession, TracingLog};
//!
//! let rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let mut battle = BattleSession::new(&mut red, &mut blue, rng, Box::new(TracingLog))?;
//!
//! battle.run(&mut AutoInput::new(), 500)?;
//! println!("{}", battle.determine_battle_result());
//! ```

pub mod combat;
pub mod config;
pub mod error;
pub mod log;
pub mod policy;
pub mod session;
pub mod types;

// Re-export main types at crate root for convenience
pub use combat::{effectiveness_message, DamageCalculator, DamageRoll};
pub use config::{BattleConfig, DamageConfig, StatusConfig};
pub use error::{BattleError, MovepoolError, Result, RosterError};
pub use log::{BattleLog, LogLevel, MemoryLog, NullLog, TracingLog};
pub use policy::DecisionPolicy;
pub use session::{
    validator, Action, AttackReport, AutoInput, BattleSession, Phase, Side, TurnInput,
    TurnOutcome,
};
pub use types::{
    chart_entry, Controller, Creature, Item, ItemEffect, Move, Roster, Status, StatusCondition,
    StatusInfliction, StatusTick, Type, MAX_MOVES, TYPE_CHART,
};
