use std::path::PathBuf;

use thiserror::Error;
use tussle_battle::{MovepoolError, RosterError};

/// Why a team file could not be turned into a roster
#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid team JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Move {0} is defined twice with different stats")]
    ConflictingMove(String),

    #[error(transparent)]
    Movepool(#[from] MovepoolError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Team {0} has no creature able to lead")]
    NoActive(String),
}
