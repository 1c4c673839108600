//! Combat formulas

mod damage;

pub use damage::{effectiveness_message, DamageCalculator, DamageRoll};
