//! Status conditions and their per-turn effects

use rand::Rng;

use crate::config::StatusConfig;

/// Persistent status conditions. The absence of a status is `None` at use sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Poison,
    Paralysis,
    Sleep,
    Freeze,
}

impl Status {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Poison => "Poison",
            Status::Paralysis => "Paralysis",
            Status::Sleep => "Sleep",
            Status::Freeze => "Freeze",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one status tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTick {
    /// Status in effect when the tick started
    pub status: Option<Status>,

    /// HP the creature should lose from this tick
    pub damage: u32,

    /// Whether the creature may act this turn
    pub can_move: bool,

    /// Woke up or thawed on this tick
    pub recovered: bool,
}

impl StatusTick {
    fn idle(status: Option<Status>) -> Self {
        Self {
            status,
            damage: 0,
            can_move: true,
            recovered: false,
        }
    }
}

/// Status state machine owned by one creature.
///
/// The first inflicted status wins and stays until cured, or until sleep
/// and freeze wear off on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCondition {
    status: Option<Status>,
    sleep_turns: u32,
}

impl StatusCondition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status, if any
    pub fn current(&self) -> Option<Status> {
        self.status
    }

    /// Remaining sleep turns (0 unless asleep)
    pub fn sleep_turns(&self) -> u32 {
        self.sleep_turns
    }

    /// Inflict a status. Returns false (and changes nothing) if one is already set.
    pub fn inflict(&mut self, status: Status) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }

    /// Clear any status and the sleep counter
    pub fn cure(&mut self) {
        self.status = None;
        self.sleep_turns = 0;
    }

    /// Set how many ticks a sleeping creature stays asleep
    pub fn set_sleep_duration(&mut self, turns: u32) {
        self.sleep_turns = turns;
    }

    /// Advance the condition by one turn boundary
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        max_hp: u32,
        rng: &mut R,
        config: &StatusConfig,
    ) -> StatusTick {
        let status = self.status;
        let mut tick = StatusTick::idle(status);

        match status {
            None => {}
            Some(Status::Burn) => {
                tick.damage = max_hp / config.burn_divisor.max(1);
            }
            Some(Status::Poison) => {
                tick.damage = max_hp / config.poison_divisor.max(1);
            }
            Some(Status::Paralysis) => {
                tick.can_move = !rng.gen_bool(config.paralysis_chance.clamp(0.0, 1.0));
            }
            Some(Status::Sleep) => {
                if self.sleep_turns > 0 {
                    self.sleep_turns -= 1;
                    tick.can_move = false;
                } else {
                    self.cure();
                    tick.recovered = true;
                }
            }
            Some(Status::Freeze) => {
                if rng.gen_bool(config.thaw_chance.clamp(0.0, 1.0)) {
                    self.cure();
                    tick.recovered = true;
                } else {
                    tick.can_move = false;
                }
            }
        }

        tick
    }
}
