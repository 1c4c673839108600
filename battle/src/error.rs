//! Error types for battle actions and roster construction

use thiserror::Error;

/// Rejected battle action. Raised before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Missing participant: {0}")]
    MissingParticipant(&'static str),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Invalid switch: {0}")]
    InvalidSwitch(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, BattleError>;

/// Why a move could not be added to a movepool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovepoolError {
    #[error("{creature} already knows {name}")]
    AlreadyKnown { creature: String, name: String },

    #[error("{creature} already knows four moves")]
    Full { creature: String },

    #[error("{creature} must reach level {required} to learn {name}")]
    LevelTooLow {
        creature: String,
        name: String,
        required: u8,
    },
}

/// Why a creature could not be added to a roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("{roster} already has a creature named {name}")]
    DuplicateCreature { roster: String, name: String },
}
