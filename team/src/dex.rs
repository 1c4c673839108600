use std::collections::HashMap;
use std::sync::Arc;

use tussle_battle::Move;

use crate::error::TeamError;
use crate::spec::{MoveRef, MoveSpec};

/// Move registry keyed by case-insensitive name
#[derive(Debug, Default)]
pub struct MoveDex {
    moves: HashMap<String, Arc<Move>>,
}

impl MoveDex {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Move>> {
        self.moves.get(&Self::key(name)).cloned()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Register a move. Defining an identical move again returns the
    /// existing `Arc`; a different move under the same name is an error.
    pub fn define(&mut self, spec: &MoveSpec) -> Result<Arc<Move>, TeamError> {
        let mv = spec.to_move()?;
        let key = Self::key(&spec.name);

        match self.moves.get(&key) {
            Some(existing) if **existing == mv => Ok(existing.clone()),
            Some(_) => Err(TeamError::ConflictingMove(spec.name.clone())),
            None => {
                let mv = Arc::new(mv);
                self.moves.insert(key, mv.clone());
                Ok(mv)
            }
        }
    }

    /// Look up a move by name, or define it inline
    pub fn resolve(&mut self, reference: &MoveRef) -> Result<Arc<Move>, TeamError> {
        match reference {
            MoveRef::Name(name) => self
                .get(name)
                .ok_or_else(|| TeamError::UnknownMove(name.clone())),
            MoveRef::Inline(spec) => self.define(spec),
        }
    }
}
