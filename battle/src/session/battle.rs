//! BattleSession - turn state machine for one battle between two rosters

use std::collections::VecDeque;
use std::sync::Arc;

use rand::Rng;

use super::action::{Action, Side, TurnInput};
use super::validator::{validate_item, validate_move, validate_switch};
use crate::combat::{effectiveness_message, DamageCalculator};
use crate::config::BattleConfig;
use crate::error::{BattleError, Result};
use crate::log::BattleLog;
use crate::policy::DecisionPolicy;
use crate::types::{Move, Roster, Status};

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for this side to act
    AwaitingAction(Side),

    /// One roster (or both) has no creature left
    BattleOver,
}

/// What a resolved attack did
#[derive(Debug, Clone, PartialEq)]
pub struct AttackReport {
    /// Hits that landed
    pub hits: u8,

    /// Total HP taken from the defender
    pub damage: u32,

    pub effectiveness: f32,
    pub critical_hits: u8,

    /// HP the attacker lost to recoil
    pub recoil: u32,

    /// HP the attacker regained
    pub healed: u32,

    /// Status newly inflicted on the defender
    pub inflicted: Option<Status>,

    pub defender_fainted: bool,
    pub attacker_fainted: bool,
}

/// How a call to [`BattleSession::play_turn`] resolved
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The side's action was carried out
    Acted { side: Side, action: Action },

    /// The active creature could not move (sleep, freeze, paralysis)
    Immobilized { side: Side, status: Option<Status> },

    /// The active creature fainted from status damage before acting
    FaintedFromStatus { side: Side, status: Option<Status> },
}

/// One battle between two rosters.
///
/// The session borrows both rosters for its lifetime and is their only
/// writer while it exists. Every action is validated before anything is
/// changed, so a rejected action leaves creatures, rosters and history
/// untouched.
pub struct BattleSession<'a, R: Rng> {
    rosters: [&'a mut Roster; 2],

    // === Turn state ===
    turn_owner: Side,
    turn: u32,

    /// Status effects already ticked for the current turn owner
    status_applied: bool,

    /// Most recent action descriptions, oldest first
    history: VecDeque<String>,

    // === Collaborators ===
    config: BattleConfig,
    calculator: DamageCalculator,
    policy: DecisionPolicy,
    rng: R,
    log: Box<dyn BattleLog>,
}

impl<'a, R: Rng> BattleSession<'a, R> {
    /// Start a battle with default tunables. P1 acts first.
    pub fn new(
        p1: &'a mut Roster,
        p2: &'a mut Roster,
        rng: R,
        log: Box<dyn BattleLog>,
    ) -> Result<Self> {
        Self::with_config(p1, p2, BattleConfig::default(), rng, log)
    }

    /// Start a battle. Both rosters need a conscious active creature.
    pub fn with_config(
        p1: &'a mut Roster,
        p2: &'a mut Roster,
        config: BattleConfig,
        rng: R,
        log: Box<dyn BattleLog>,
    ) -> Result<Self> {
        if let Some(field) = config.non_finite_field() {
            return Err(BattleError::InvalidOperation(format!(
                "config value {} must be a finite number",
                field
            )));
        }
        for roster in [&*p1, &*p2] {
            if !roster.has_alive() {
                return Err(BattleError::InvalidOperation(format!(
                    "{} has no creature able to battle",
                    roster.name()
                )));
            }
            if !roster.is_battle_ready() {
                return Err(BattleError::InvalidOperation(format!(
                    "{} has no conscious active creature",
                    roster.name()
                )));
            }
        }

        log.info(&format!("Battle started: {} vs {}", p1.name(), p2.name()));

        Ok(Self {
            rosters: [p1, p2],
            turn_owner: Side::P1,
            turn: 1,
            status_applied: false,
            history: VecDeque::with_capacity(config.history_len),
            calculator: DamageCalculator::new(config.damage),
            config,
            policy: DecisionPolicy::new(),
            rng,
            log,
        })
    }

    // === Accessors ===

    /// Side whose turn it is
    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    /// Current turn number, starting at 1
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn roster(&self, side: Side) -> &Roster {
        &*self.rosters[side.index()]
    }

    /// Roster whose turn it is
    pub fn current(&self) -> &Roster {
        self.roster(self.turn_owner)
    }

    /// Roster waiting for its turn
    pub fn opponent(&self) -> &Roster {
        self.roster(self.turn_owner.opponent())
    }

    /// Recent action descriptions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn phase(&self) -> Phase {
        if self.is_battle_over() {
            Phase::BattleOver
        } else {
            Phase::AwaitingAction(self.turn_owner)
        }
    }

    // === Actions ===

    /// The turn owner's active creature uses `mv` on the opponent's active creature
    pub fn perform_attack(&mut self, mv: &Arc<Move>) -> Result<AttackReport> {
        self.ensure_ongoing()?;

        let a = self.turn_owner.index();
        let d = self.turn_owner.opponent().index();

        validate_move(self.rosters[a].active(), mv)?;
        let Some(defender) = self.rosters[d].active() else {
            return Err(BattleError::InvalidOperation(format!(
                "{} has no active creature to target",
                self.rosters[d].name()
            )));
        };

        let effectiveness = mv.kind().effectiveness(defender.kind());
        let defender_name = defender.name().to_string();
        let attacker_name = self.rosters[a]
            .active()
            .map(|c| c.name().to_string())
            .unwrap_or_default();

        let mut report = AttackReport {
            hits: 0,
            damage: 0,
            effectiveness,
            critical_hits: 0,
            recoil: 0,
            healed: 0,
            inflicted: None,
            defender_fainted: false,
            attacker_fainted: false,
        };

        let hits = if mv.hits() > 1 {
            self.rng.gen_range(2..=mv.hits())
        } else {
            1
        };

        // Power 0 moves only carry their side effects
        if mv.power() > 0 {
            for _ in 0..hits {
                let (Some(attacker), Some(defender)) =
                    (self.rosters[a].active(), self.rosters[d].active())
                else {
                    break;
                };
                let roll = self
                    .calculator
                    .calculate_damage(attacker, defender, mv, &mut self.rng);

                if let Some(defender) = self.rosters[d].active_mut() {
                    report.hits += 1;
                    report.damage += defender.take_damage(roll.damage);
                    if roll.critical {
                        report.critical_hits += 1;
                    }
                    if defender.is_fainted() {
                        break;
                    }
                }
            }
        }

        if let Some(rider) = mv.status_infliction()
            && effectiveness > 0.0
            && self.rng.gen_range(0..100u8) < rider.chance
            && let Some(defender) = self.rosters[d].active_mut()
            && defender.inflict_status(rider.status)
        {
            if rider.status == Status::Sleep {
                let turns = self
                    .rng
                    .gen_range(1..=self.config.status.max_sleep_turns.max(1));
                defender.set_sleep_duration(turns);
            }
            report.inflicted = Some(rider.status);
        }

        if mv.recoil_percent() > 0 {
            let recoil = self.calculator.calculate_recoil_damage(mv);
            if let Some(attacker) = self.rosters[a].active_mut() {
                report.recoil = attacker.take_damage(recoil);
            }
        }

        if mv.healing_percent() > 0
            && let Some(attacker) = self.rosters[a].active_mut()
        {
            let amount = self.calculator.calculate_healing_amount(attacker, mv);
            report.healed = attacker.heal(amount);
        }

        report.defender_fainted = self.rosters[d].active().is_none_or(|c| c.is_fainted());
        report.attacker_fainted = self.rosters[a].active().is_none_or(|c| c.is_fainted());

        let mut entry = format!("{} used {} on {}", attacker_name, mv.name(), defender_name);
        if mv.power() > 0 {
            entry.push_str(&format!(" for {} damage", report.damage));
        }
        if report.hits > 1 {
            entry.push_str(&format!(" ({} hits)", report.hits));
        }
        if let Some(status) = report.inflicted {
            entry.push_str(&format!(", inflicting {}", status));
        }
        if report.recoil > 0 {
            entry.push_str(&format!(", {} recoil", report.recoil));
        }
        if report.healed > 0 {
            entry.push_str(&format!(", healed {}", report.healed));
        }

        self.log.info(&entry);
        if report.critical_hits > 0 {
            self.log.info("A critical hit!");
        }
        let message = effectiveness_message(effectiveness);
        if !message.is_empty() {
            self.log.info(message);
        }
        if report.damage > 0
            && let Some(defender) = self.rosters[d].active()
            && !defender.is_fainted()
        {
            self.log
                .info(&format!("{} has {}% HP left", defender_name, defender.hp_percent()));
        }

        if report.defender_fainted {
            let faint = self.handle_faint(self.turn_owner.opponent());
            entry.push_str("; ");
            entry.push_str(&faint);
        }
        if report.attacker_fainted {
            let faint = self.handle_faint(self.turn_owner);
            entry.push_str("; ");
            entry.push_str(&faint);
        }

        self.record(entry);
        Ok(report)
    }

    /// Send out the creature at `slot` for `side`
    pub fn perform_switch(&mut self, side: Side, slot: usize) -> Result<()> {
        self.ensure_ongoing()?;
        validate_switch(self.roster(side), slot)?;

        let roster = &mut *self.rosters[side.index()];
        let previous = roster.active().map(|c| c.name().to_string());
        roster.set_active(slot);
        let next = roster
            .active()
            .map(|c| c.name().to_string())
            .unwrap_or_default();

        let entry = match previous {
            Some(previous) => format!(
                "{} withdrew {} and sent out {}",
                roster.name(),
                previous,
                next
            ),
            None => format!("{} sent out {}", roster.name(), next),
        };

        self.log.info(&entry);
        self.record(entry);
        Ok(())
    }

    /// The turn owner uses the bag item at `item` on its creature at `target`.
    /// Returns the HP restored.
    pub fn perform_use_item(&mut self, item: usize, target: usize) -> Result<u32> {
        self.ensure_ongoing()?;
        let side = self.turn_owner;
        validate_item(self.roster(side), item, target)?;

        let roster = &mut *self.rosters[side.index()];
        let owner = roster.name().to_string();
        let item = roster
            .take_item(item)
            .ok_or(BattleError::MissingParticipant("item"))?;
        let creature = roster
            .creature_mut(target)
            .ok_or(BattleError::MissingParticipant("target creature"))?;

        let restored = item.apply(creature);
        let entry = format!(
            "{} used {} on {} (+{} HP)",
            owner,
            item.name,
            creature.name(),
            restored
        );

        self.log.info(&entry);
        self.record(entry);
        Ok(restored)
    }

    /// Hand the turn to the other side. Does nothing once the battle is over.
    pub fn switch_turns(&mut self) {
        if self.is_battle_over() {
            self.log.warn("switch_turns called after the battle ended");
            return;
        }
        self.turn_owner = self.turn_owner.opponent();
        self.turn += 1;
        self.status_applied = false;
    }

    // === Outcome ===

    /// Whether either roster has no conscious creature left
    pub fn is_battle_over(&self) -> bool {
        self.rosters.iter().any(|r| !r.has_alive())
    }

    /// The side whose opponent is out of creatures. `None` while the battle
    /// goes on, or when both rosters ran out at once.
    pub fn determine_winner(&self) -> Option<Side> {
        match (self.rosters[0].has_alive(), self.rosters[1].has_alive()) {
            (true, false) => Some(Side::P1),
            (false, true) => Some(Side::P2),
            _ => None,
        }
    }

    /// Human-readable battle status
    pub fn determine_battle_result(&self) -> String {
        if !self.is_battle_over() {
            return "The battle is still ongoing.".to_string();
        }
        match self.determine_winner() {
            Some(side) => format!("{} wins the battle!", self.roster(side).name()),
            None => "The battle ended in a draw.".to_string(),
        }
    }

    // === Turn driver ===

    /// Play one full turn for the turn owner: status tick, action, turn switch.
    ///
    /// Automated rosters act through the decision policy; manual rosters
    /// through `input`. If the chosen action is rejected the error is
    /// returned, the turn owner is unchanged and calling again retries the
    /// action without ticking status a second time.
    pub fn play_turn(&mut self, input: &mut dyn TurnInput) -> Result<TurnOutcome> {
        self.ensure_ongoing()?;
        let side = self.turn_owner;

        if !self.status_applied {
            self.status_applied = true;
            if let Some(outcome) = self.tick_status(side) {
                if !self.is_battle_over() {
                    self.switch_turns();
                }
                return Ok(outcome);
            }
        }

        let action = {
            let me = &*self.rosters[side.index()];
            let opponent = &*self.rosters[side.opponent().index()];
            if me.is_automated() {
                self.policy.decide(me, opponent)
            } else {
                input.choose_action(me, opponent)
            }
        };

        let resolved = match &action {
            Action::Attack(mv) => self.perform_attack(mv).map(|_| ()),
            Action::Switch(slot) => self.perform_switch(side, *slot),
            Action::UseItem { item, target } => {
                self.perform_use_item(*item, *target).map(|_| ())
            }
            Action::Pass => {
                let entry = format!("{} passed", self.roster(side).name());
                self.log.info(&entry);
                self.record(entry);
                Ok(())
            }
        };
        if let Err(err) = resolved {
            self.log
                .warn(&format!("{} action rejected: {}", self.roster(side).name(), err));
            return Err(err);
        }

        if !self.is_battle_over() {
            self.switch_turns();
        }
        Ok(TurnOutcome::Acted { side, action })
    }

    /// Play turns until the battle ends or `max_turns` turns have been played
    pub fn run(&mut self, input: &mut dyn TurnInput, max_turns: u32) -> Result<Option<Side>> {
        while !self.is_battle_over() && self.turn <= max_turns {
            self.play_turn(input)?;
        }
        if !self.is_battle_over() {
            self.log
                .warn(&format!("Turn limit of {} reached without a winner", max_turns));
        }
        Ok(self.determine_winner())
    }

    // === Internals ===

    fn ensure_ongoing(&self) -> Result<()> {
        if self.is_battle_over() {
            self.log.error("action attempted after the battle ended");
            return Err(BattleError::InvalidOperation(
                "the battle is already over".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply start-of-turn status effects to `side`'s active creature.
    /// Returns an outcome when the creature loses its action.
    fn tick_status(&mut self, side: Side) -> Option<TurnOutcome> {
        let creature = self.rosters[side.index()].active_mut()?;
        let tick = creature.apply_status_effects(&mut self.rng, &self.config.status);
        let name = creature.name().to_string();
        let fainted = creature.is_fainted();
        let status = tick.status.map_or("its status", |s| s.as_str());

        if tick.damage > 0 {
            self.log
                .info(&format!("{} is hurt by {} ({} HP)", name, status, tick.damage));
        }
        if tick.recovered {
            self.log.info(&format!("{} recovered from {}", name, status));
        }

        if fainted {
            let faint = self.handle_faint(side);
            self.record(format!("{} was hurt by {}; {}", name, status, faint));
            return Some(TurnOutcome::FaintedFromStatus {
                side,
                status: tick.status,
            });
        }

        if !tick.can_move {
            let entry = format!("{} cannot move ({})", name, status);
            self.log.info(&entry);
            self.record(entry);
            return Some(TurnOutcome::Immobilized {
                side,
                status: tick.status,
            });
        }

        None
    }

    /// Replace `side`'s fainted active creature with the first conscious one
    /// in ownership order. Returns a description for the history.
    fn handle_faint(&mut self, side: Side) -> String {
        let roster = &mut *self.rosters[side.index()];
        let fainted = roster
            .active()
            .map(|c| c.name().to_string())
            .unwrap_or_default();

        let message = match roster.replace_fainted_active() {
            Some(slot) => {
                let next = roster.creature(slot).map_or("", |c| c.name());
                format!("{} fainted, {} sent out {}", fainted, roster.name(), next)
            }
            None => format!("{} fainted, {} has no creatures left", fainted, roster.name()),
        };

        self.log.info(&message);
        message
    }

    fn record(&mut self, entry: String) {
        let cap = self.config.history_len;
        if cap == 0 {
            return;
        }
        while self.history.len() >= cap {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }
}

impl<R: Rng> std::fmt::Debug for BattleSession<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleSession")
            .field("p1", &self.rosters[0].name())
            .field("p2", &self.rosters[1].name())
            .field("turn_owner", &self.turn_owner)
            .field("turn", &self.turn)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DamageConfig, StatusConfig};
    use crate::log::{MemoryLog, NullLog};
    use crate::types::{Controller, Creature, Item, Type};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1234)
    }

    fn fixed_config() -> BattleConfig {
        BattleConfig {
            damage: DamageConfig::fixed(),
            ..BattleConfig::default()
        }
    }

    fn session<'a>(
        p1: &'a mut Roster,
        p2: &'a mut Roster,
        config: BattleConfig,
    ) -> BattleSession<'a, ChaCha8Rng> {
        BattleSession::with_config(p1, p2, config, rng(), Box::new(NullLog)).unwrap()
    }

    fn roster(name: &str, controller: Controller, creatures: Vec<Creature>) -> Roster {
        let mut roster = Roster::new(name, controller);
        for c in creatures {
            roster.add_creature(c).unwrap();
        }
        roster.set_active(0);
        roster
    }

    fn learn(mut c: Creature, mv: &Arc<Move>) -> Creature {
        c.learn_move(mv.clone()).unwrap();
        c
    }

    fn no_input() -> impl FnMut(&Roster, &Roster) -> Action {
        |_: &Roster, _: &Roster| Action::Pass
    }

    #[test]
    fn test_new_requires_battle_ready_rosters() {
        let mut fainted = Creature::new("Ghost", Type::Normal, 5, 10, 5, 5);
        fainted.take_damage(10);
        let mut dead = roster("Dead", Controller::Manual, vec![fainted]);
        let mut alive = roster(
            "Alive",
            Controller::Manual,
            vec![Creature::new("Rat", Type::Normal, 5, 10, 5, 5)],
        );

        let err = BattleSession::new(&mut dead, &mut alive, rng(), Box::new(NullLog)).unwrap_err();
        assert!(matches!(err, BattleError::InvalidOperation(_)));
    }

    #[test]
    fn test_new_requires_active_creature() {
        let mut benched = Roster::new("Benched", Controller::Manual);
        benched
            .add_creature(Creature::new("Rat", Type::Normal, 5, 10, 5, 5))
            .unwrap();
        let mut alive = roster(
            "Alive",
            Controller::Manual,
            vec![Creature::new("Rat", Type::Normal, 5, 10, 5, 5)],
        );

        let err =
            BattleSession::new(&mut alive, &mut benched, rng(), Box::new(NullLog)).unwrap_err();
        assert!(matches!(err, BattleError::InvalidOperation(_)));
    }

    #[test]
    fn test_rejects_non_finite_config() {
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![Creature::new("Rat", Type::Normal, 5, 10, 5, 5)],
        );
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![Creature::new("Rat", Type::Normal, 5, 10, 5, 5)],
        );
        let mut config = fixed_config();
        config.status.paralysis_chance = f64::NAN;

        let err = BattleSession::with_config(&mut p1, &mut p2, config, rng(), Box::new(NullLog))
            .unwrap_err();
        assert!(matches!(err, BattleError::InvalidOperation(msg) if msg.contains("paralysis_chance")));
    }

    #[test]
    fn test_attack_damages_and_records() {
        let bolt = Arc::new(Move::new("Thunderbolt", Type::Electric, 90));
        let mut p1 = roster(
            "Ash",
            Controller::Manual,
            vec![learn(Creature::new("Pikachu", Type::Electric, 10, 100, 55, 40), &bolt)],
        );
        let mut p2 = roster(
            "Misty",
            Controller::Manual,
            vec![Creature::new("Staryu", Type::Water, 10, 150, 45, 50)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let report = battle.perform_attack(&bolt).unwrap();
        assert_eq!(report.damage, 41);
        assert_eq!(report.hits, 1);
        assert_eq!(battle.opponent().active().unwrap().hp(), 109);
        assert_eq!(battle.turn_owner(), Side::P1);
        assert_eq!(
            battle.history().collect::<Vec<_>>(),
            vec!["Pikachu used Thunderbolt on Staryu for 41 damage"]
        );
    }

    #[test]
    fn test_off_type_move_has_no_stab() {
        let quick = Arc::new(Move::new("Quick Attack", Type::Normal, 40));
        let mut p1 = roster(
            "Ash",
            Controller::Manual,
            vec![learn(Creature::new("Pikachu", Type::Electric, 10, 100, 55, 40), &quick)],
        );
        let mut p2 = roster(
            "Gary",
            Controller::Manual,
            vec![Creature::new("Raticate", Type::Normal, 10, 150, 60, 50)],
        );
        let log = Arc::new(MemoryLog::new());
        let mut battle =
            BattleSession::with_config(&mut p1, &mut p2, fixed_config(), rng(), Box::new(log.clone()))
                .unwrap();

        // (6 * 40 * 55/50) / 50 + 2 = 7.28, no 1.5 bonus
        let report = battle.perform_attack(&quick).unwrap();
        assert_eq!(report.damage, 7);
        assert_eq!(battle.opponent().active().unwrap().hp(), 143);
        assert!(log
            .lines()
            .iter()
            .any(|(_, line)| line == "Raticate has 95% HP left"));
    }

    #[test]
    fn test_invalid_move_changes_nothing() {
        let bolt = Arc::new(Move::new("Thunderbolt", Type::Electric, 90));
        let mut p1 = roster(
            "Ash",
            Controller::Manual,
            vec![Creature::new("Pikachu", Type::Electric, 10, 100, 55, 40)],
        );
        let mut p2 = roster(
            "Misty",
            Controller::Manual,
            vec![Creature::new("Staryu", Type::Water, 10, 150, 45, 50)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let err = battle.perform_attack(&bolt).unwrap_err();
        assert!(matches!(err, BattleError::InvalidMove(_)));
        assert_eq!(battle.opponent().active().unwrap().hp(), 150);
        assert_eq!(battle.history().count(), 0);
    }

    #[test]
    fn test_recoil_and_healing() {
        let tackle = Arc::new(Move::new("Volt Tackle", Type::Electric, 100).recoil(25));
        let drain = Arc::new(Move::new("Parabolic Charge", Type::Electric, 20).healing(50));
        let mut pikachu = Creature::new("Pikachu", Type::Electric, 10, 100, 55, 40);
        pikachu.learn_move(tackle.clone()).unwrap();
        pikachu.learn_move(drain.clone()).unwrap();
        let mut p1 = roster("Ash", Controller::Manual, vec![pikachu]);
        let mut p2 = roster(
            "Brock",
            Controller::Manual,
            vec![Creature::new("Onix", Type::Rock, 10, 300, 45, 160)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let report = battle.perform_attack(&tackle).unwrap();
        assert_eq!(report.recoil, 25);
        assert_eq!(battle.current().active().unwrap().hp(), 75);

        let report = battle.perform_attack(&drain).unwrap();
        assert_eq!(report.healed, 25);
        assert_eq!(battle.current().active().unwrap().hp(), 100);

        let report = battle.perform_attack(&drain).unwrap();
        assert_eq!(report.healed, 0);
    }

    #[test]
    fn test_multi_hit_range() {
        let barrage = Arc::new(Move::new("Barrage", Type::Normal, 15).max_hits(5));
        let mut attacker = Creature::new("Exeggcute", Type::Normal, 10, 100, 40, 80);
        attacker.learn_move(barrage.clone()).unwrap();
        let mut p1 = roster("A", Controller::Manual, vec![attacker]);
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![Creature::new("Snorlax", Type::Normal, 10, 5000, 110, 65)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        // ((6 * 15 * 40/65) / 50 + 2) * 1.5 = 4.66
        for _ in 0..20 {
            let report = battle.perform_attack(&barrage).unwrap();
            assert!((2..=5).contains(&report.hits), "hits {}", report.hits);
            assert_eq!(report.damage, 4 * u32::from(report.hits));
        }
    }

    #[test]
    fn test_multi_hit_stops_at_faint() {
        let barrage = Arc::new(Move::new("Barrage", Type::Normal, 15).max_hits(5));
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![learn(Creature::new("Snorlax", Type::Normal, 50, 300, 110, 65), &barrage)],
        );
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![
                Creature::new("Weak", Type::Fire, 5, 10, 5, 5),
                Creature::new("Next", Type::Fire, 5, 50, 5, 5),
            ],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let report = battle.perform_attack(&barrage).unwrap();
        assert_eq!(report.hits, 1);
        assert_eq!(report.damage, 10);
        assert!(report.defender_fainted);

        let next = battle.opponent().active().unwrap();
        assert_eq!(next.name(), "Next");
        assert_eq!(next.hp(), 50);
    }

    #[test]
    fn test_faint_brings_in_first_conscious_creature() {
        let slam = Arc::new(Move::new("Body Slam", Type::Normal, 85));
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![learn(Creature::new("Snorlax", Type::Normal, 50, 300, 110, 65), &slam)],
        );
        let mut already_down = Creature::new("Down", Type::Fire, 10, 50, 10, 10);
        already_down.take_damage(50);
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![
                Creature::new("Weak", Type::Fire, 5, 10, 5, 5),
                already_down,
                Creature::new("Next", Type::Fire, 5, 50, 5, 5),
                Creature::new("Last", Type::Fire, 5, 50, 5, 5),
            ],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let report = battle.perform_attack(&slam).unwrap();
        assert!(report.defender_fainted);
        assert_eq!(battle.opponent().active().unwrap().name(), "Next");
        assert!(!battle.is_battle_over());
        assert!(battle.history().last().unwrap().contains("Weak fainted"));
    }

    #[test]
    fn test_last_faint_ends_battle() {
        let slam = Arc::new(Move::new("Body Slam", Type::Normal, 85));
        let mut p1 = roster(
            "Red",
            Controller::Manual,
            vec![learn(Creature::new("Snorlax", Type::Normal, 50, 300, 110, 65), &slam)],
        );
        let mut p2 = roster(
            "Blue",
            Controller::Manual,
            vec![Creature::new("Weak", Type::Fire, 5, 10, 5, 5)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        assert_eq!(battle.determine_battle_result(), "The battle is still ongoing.");
        battle.perform_attack(&slam).unwrap();

        assert!(battle.is_battle_over());
        assert_eq!(battle.phase(), Phase::BattleOver);
        assert_eq!(battle.determine_winner(), Some(Side::P1));
        assert_eq!(battle.determine_battle_result(), "Red wins the battle!");
        assert!(battle.opponent().active().is_none());

        let err = battle.perform_attack(&slam).unwrap_err();
        assert!(matches!(err, BattleError::InvalidOperation(_)));

        battle.switch_turns();
        assert_eq!(battle.turn_owner(), Side::P1);
    }

    #[test]
    fn test_recoil_draw() {
        let tackle = Arc::new(Move::new("Double-Edge", Type::Normal, 120).recoil(100));
        let mut p1 = roster(
            "Red",
            Controller::Manual,
            vec![learn(Creature::new("Tauros", Type::Normal, 50, 100, 100, 95), &tackle)],
        );
        let mut p2 = roster(
            "Blue",
            Controller::Manual,
            vec![Creature::new("Weak", Type::Fire, 5, 10, 5, 5)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let report = battle.perform_attack(&tackle).unwrap();
        assert!(report.defender_fainted);
        assert!(report.attacker_fainted);
        assert!(battle.is_battle_over());
        assert_eq!(battle.determine_winner(), None);
        assert_eq!(battle.determine_battle_result(), "The battle ended in a draw.");
    }

    #[test]
    fn test_switch_rules() {
        let mut down = Creature::new("Down", Type::Fire, 10, 50, 10, 10);
        down.take_damage(50);
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![
                Creature::new("Lead", Type::Water, 10, 50, 10, 10),
                down,
                Creature::new("Bench", Type::Grass, 10, 50, 10, 10),
            ],
        );
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![Creature::new("Foe", Type::Fire, 10, 50, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        for slot in [1, 5, 0] {
            let err = battle.perform_switch(Side::P1, slot).unwrap_err();
            assert!(matches!(err, BattleError::InvalidSwitch(_)));
            assert_eq!(battle.roster(Side::P1).active_slot(), Some(0));
        }

        battle.perform_switch(Side::P1, 2).unwrap();
        assert_eq!(battle.roster(Side::P1).active().unwrap().name(), "Bench");
        assert_eq!(
            battle.history().last(),
            Some("A withdrew Lead and sent out Bench")
        );
    }

    #[test]
    fn test_use_item() {
        let mut lead = Creature::new("Lead", Type::Water, 10, 100, 10, 10);
        lead.take_damage(70);
        let mut p1 = roster("A", Controller::Manual, vec![lead]);
        p1.add_item(Item::potion("Potion", 20));
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![Creature::new("Foe", Type::Fire, 10, 50, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        assert_eq!(battle.perform_use_item(0, 0).unwrap(), 20);
        assert_eq!(battle.current().active().unwrap().hp(), 50);
        assert!(battle.current().items().is_empty());

        let err = battle.perform_use_item(0, 0).unwrap_err();
        assert_eq!(err, BattleError::MissingParticipant("item"));
    }

    #[test]
    fn test_history_keeps_last_four() {
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![
                Creature::new("One", Type::Water, 10, 50, 10, 10),
                Creature::new("Two", Type::Water, 10, 50, 10, 10),
            ],
        );
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![Creature::new("Foe", Type::Fire, 10, 50, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        for i in 0..6 {
            battle.perform_switch(Side::P1, (i + 1) % 2).unwrap();
        }
        let history: Vec<_> = battle.history().collect();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0], "A withdrew One and sent out Two");
        assert_eq!(history[3], "A withdrew Two and sent out One");
    }

    #[test]
    fn test_play_turn_pass_switches_owner() {
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![Creature::new("Lead", Type::Water, 10, 50, 10, 10)],
        );
        let mut p2 = roster(
            "B",
            Controller::Automated,
            vec![Creature::new("Foe", Type::Fire, 10, 50, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());
        let mut input = no_input();

        let outcome = battle.play_turn(&mut input).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Acted {
                side: Side::P1,
                action: Action::Pass
            }
        );
        assert_eq!(battle.turn_owner(), Side::P2);
        assert_eq!(battle.turn(), 2);
        assert_eq!(battle.phase(), Phase::AwaitingAction(Side::P2));
    }

    #[test]
    fn test_paralysis_immobilizes() {
        let mut lead = Creature::new("Lead", Type::Water, 10, 50, 10, 10);
        lead.inflict_status(Status::Paralysis);
        let mut p1 = roster("A", Controller::Automated, vec![lead]);
        let mut p2 = roster(
            "B",
            Controller::Automated,
            vec![Creature::new("Foe", Type::Fire, 10, 50, 10, 10)],
        );
        let config = BattleConfig {
            status: StatusConfig {
                paralysis_chance: 1.0,
                ..StatusConfig::default()
            },
            ..fixed_config()
        };
        let mut battle = session(&mut p1, &mut p2, config);

        let outcome = battle.play_turn(&mut no_input()).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Immobilized {
                side: Side::P1,
                status: Some(Status::Paralysis)
            }
        );
        assert_eq!(battle.turn_owner(), Side::P2);
        assert_eq!(battle.history().last(), Some("Lead cannot move (Paralysis)"));
    }

    #[test]
    fn test_rejected_manual_action_does_not_retick_status() {
        let splash = Arc::new(Move::new("Water Gun", Type::Water, 40));
        let mut lead = learn(Creature::new("Lead", Type::Water, 10, 160, 10, 10), &splash);
        lead.inflict_status(Status::Burn);
        let mut p1 = roster("A", Controller::Manual, vec![lead]);
        let mut p2 = roster(
            "B",
            Controller::Automated,
            vec![Creature::new("Foe", Type::Fire, 10, 500, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let mut bad = |_: &Roster, _: &Roster| Action::Switch(3);
        let err = battle.play_turn(&mut bad).unwrap_err();
        assert!(matches!(err, BattleError::InvalidSwitch(_)));
        assert_eq!(battle.turn_owner(), Side::P1);
        assert_eq!(battle.current().active().unwrap().hp(), 150);

        let mut good = move |_: &Roster, _: &Roster| Action::Attack(splash.clone());
        battle.play_turn(&mut good).unwrap();
        assert_eq!(battle.roster(Side::P1).active().unwrap().hp(), 150);
        assert_eq!(battle.turn_owner(), Side::P2);
    }

    #[test]
    fn test_status_faint_replaces_creature() {
        let mut lead = Creature::new("Lead", Type::Grass, 10, 16, 10, 10);
        lead.take_damage(14);
        lead.inflict_status(Status::Poison);
        let mut p1 = roster(
            "A",
            Controller::Automated,
            vec![lead, Creature::new("Backup", Type::Grass, 10, 50, 10, 10)],
        );
        let mut p2 = roster(
            "B",
            Controller::Automated,
            vec![Creature::new("Foe", Type::Fire, 10, 50, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let outcome = battle.play_turn(&mut no_input()).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::FaintedFromStatus {
                side: Side::P1,
                status: Some(Status::Poison)
            }
        );
        assert_eq!(battle.roster(Side::P1).active().unwrap().name(), "Backup");
        assert_eq!(battle.turn_owner(), Side::P2);
    }

    #[test]
    fn test_status_rider_inflicts_sleep() {
        let spore = Arc::new(Move::new("Spore", Type::Grass, 0).inflicts(Status::Sleep, 100));
        let mut p1 = roster(
            "A",
            Controller::Manual,
            vec![learn(Creature::new("Shroom", Type::Grass, 10, 50, 10, 10), &spore)],
        );
        let mut p2 = roster(
            "B",
            Controller::Manual,
            vec![Creature::new("Foe", Type::Normal, 10, 50, 10, 10)],
        );
        let mut battle = session(&mut p1, &mut p2, fixed_config());

        let report = battle.perform_attack(&spore).unwrap();
        assert_eq!(report.damage, 0);
        assert_eq!(report.inflicted, Some(Status::Sleep));
        let foe = battle.opponent().active().unwrap();
        assert_eq!(foe.status(), Some(Status::Sleep));
        assert!((1..=3).contains(&foe.condition().sleep_turns()));
        assert_eq!(foe.hp(), 50);
    }

    #[test]
    fn test_run_automated_battle_to_completion() {
        let ember = Arc::new(Move::new("Ember", Type::Fire, 40));
        let vine = Arc::new(Move::new("Vine Whip", Type::Grass, 45));
        let mut p1 = roster(
            "Fire",
            Controller::Automated,
            vec![learn(Creature::new("Charmander", Type::Fire, 12, 60, 52, 43), &ember)],
        );
        let mut p2 = roster(
            "Grass",
            Controller::Automated,
            vec![learn(Creature::new("Bulbasaur", Type::Grass, 12, 60, 49, 49), &vine)],
        );
        let mut battle = BattleSession::new(&mut p1, &mut p2, rng(), Box::new(NullLog)).unwrap();

        let winner = battle.run(&mut no_input(), 200).unwrap();
        assert!(battle.is_battle_over());
        assert_eq!(winner, Some(Side::P1));
        assert_eq!(battle.determine_battle_result(), "Fire wins the battle!");
        assert!(battle.history().count() <= 4);
    }
}
