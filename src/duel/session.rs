//! Duel session: the phase machine around staged player choices
//!
//! choose_move -> choose_zone -> animate -> back to choose_move, or result.
//! Committing a zone makes the opponent answer and resolves the round in
//! the same step; animate is pure display time held by the caller.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Victor;
use crate::duel::ai::{self, AiStyle};
use crate::duel::constants::{
    BARFIGHT_HP, BOARDING_HP_MULT, BOARDING_STRENGTH_DIVISOR, DUEL_LOG_CAPACITY,
};
use crate::duel::fighter::{DuelContext, Fighter, OpponentTemplate, ReturnMode};
use crate::duel::moves::{GuardZone, MoveKind};
use crate::duel::resolve::{resolve_round, RoundReport, Strike, StrikeOutcome};
use crate::encounter::snapshot::EncounterSnapshot;

/// Where the duel loop stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelPhase {
    ChooseMove,
    ChooseZone,
    Animate,
    Result,
}

/// The last few lines of narration; older lines scroll away
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl DuelLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Full state of one sword fight
///
/// Terminal once `resolved` is set; selection operations are refused after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelState {
    pub player: Fighter,
    pub enemy: Fighter,
    pub enemy_name: String,
    pub enemy_agility: u32,
    pub enemy_style: AiStyle,
    pub context: DuelContext,
    pub phase: DuelPhase,
    pub round: u32,
    pub staged_move: Option<MoveKind>,
    pub staged_zone: Option<GuardZone>,
    pub last_player_zone: Option<GuardZone>,
    pub last_round: Option<RoundReport>,
    pub log: DuelLog,
    pub resolved: bool,
    pub victor: Option<Victor>,
}

impl DuelState {
    /// Square up against the context's stock opponent, or an override
    pub fn new(
        context: DuelContext,
        snapshot: &EncounterSnapshot,
        override_template: Option<OpponentTemplate>,
    ) -> Self {
        let template = override_template.unwrap_or_else(|| context.stock_opponent());

        let mut player = Fighter::player_baseline();
        match context {
            DuelContext::Boarding => {
                player.strength += snapshot.boarding_bonus / BOARDING_STRENGTH_DIVISOR;
                player.hp += snapshot.boarding_bonus * BOARDING_HP_MULT;
                player.max_hp = player.hp;
            }
            DuelContext::Barfight => {
                player.hp = BARFIGHT_HP;
                player.max_hp = BARFIGHT_HP;
            }
            DuelContext::Duel | DuelContext::StealthFight => {}
        }

        let mut log = DuelLog::new(DUEL_LOG_CAPACITY);
        let footwork = if template.agility >= 7 {
            "light on their feet"
        } else {
            "planted like a mast"
        };
        log.push(format!(
            "The {} squares up, {}.",
            template.name, footwork
        ));

        tracing::info!(
            opponent = %template.name,
            style = ?template.style,
            context = ?context,
            "duel opened"
        );

        Self {
            player,
            enemy: template.to_fighter(),
            enemy_name: template.name.clone(),
            enemy_agility: template.agility,
            enemy_style: template.style,
            context,
            phase: DuelPhase::ChooseMove,
            round: 1,
            staged_move: None,
            staged_zone: None,
            last_player_zone: None,
            last_round: None,
            log,
            resolved: false,
            victor: None,
        }
    }

    /// Which screen the caller returns to when the dust settles
    pub fn return_mode(&self) -> ReturnMode {
        self.context.return_mode()
    }

    pub fn can_afford(&self, mv: MoveKind) -> bool {
        self.player.can_afford(mv)
    }

    /// Stage the player's move. Refused outside choose_move or when the
    /// player is too winded to pay for it.
    pub fn select_move(&mut self, mv: MoveKind) -> bool {
        if self.phase != DuelPhase::ChooseMove || self.resolved {
            return false;
        }
        if !self.can_afford(mv) {
            return false;
        }

        self.staged_move = Some(mv);
        self.phase = DuelPhase::ChooseZone;
        true
    }

    /// Step back to move selection without committing anything
    pub fn cancel_move(&mut self) -> bool {
        if self.phase != DuelPhase::ChooseZone {
            return false;
        }

        self.staged_move = None;
        self.phase = DuelPhase::ChooseMove;
        true
    }

    /// Commit the zone: the opponent answers and the round resolves
    pub fn select_zone(&mut self, zone: GuardZone, rng: &mut impl Rng) -> bool {
        if self.phase != DuelPhase::ChooseZone || self.resolved {
            return false;
        }
        let player_move = match self.staged_move {
            Some(mv) => mv,
            None => return false,
        };

        // The opponent reads the zone the player struck LAST round; the
        // fresh zone is only recorded once the choice is made
        let enemy_move = ai::choose_move(self.enemy_style, &self.enemy, rng);
        let enemy_zone = ai::choose_zone(self.enemy_style, self.last_player_zone, rng);

        let report = resolve_round(
            &mut self.player,
            player_move,
            zone,
            &mut self.enemy,
            enemy_move,
            enemy_zone,
            rng,
        );

        tracing::debug!(
            round = self.round,
            player_move = ?player_move,
            enemy_move = ?enemy_move,
            player_damage = report.player.damage,
            enemy_damage = report.enemy.damage,
            "round resolved"
        );

        self.log.push(describe_player_strike(&report.player, &self.enemy_name));
        self.log.push(describe_enemy_strike(&report.enemy, &self.enemy_name));

        self.staged_zone = Some(zone);
        self.last_player_zone = Some(zone);
        self.last_round = Some(report);
        self.phase = DuelPhase::Animate;
        true
    }

    /// The caller holds animate for pacing, then hands control back here
    pub fn finish_animation(&mut self) -> DuelPhase {
        if self.phase != DuelPhase::Animate {
            return self.phase;
        }

        self.staged_move = None;
        self.staged_zone = None;

        match self.check_end() {
            Some(_) => self.phase = DuelPhase::Result,
            None => {
                self.round += 1;
                self.phase = DuelPhase::ChooseMove;
            }
        }
        self.phase
    }

    /// Settle the fight if someone is down
    ///
    /// The enemy is checked first, so a mutual kill goes to the player.
    pub fn check_end(&mut self) -> Option<Victor> {
        if self.resolved {
            return self.victor;
        }

        let victor = if self.enemy.is_down() {
            Some(Victor::Player)
        } else if self.player.is_down() {
            Some(Victor::Enemy)
        } else {
            None
        };

        if let Some(v) = victor {
            self.resolved = true;
            self.victor = Some(v);
            let line = match v {
                Victor::Player => format!("The {} drops their blade.", self.enemy_name),
                Victor::Enemy => "Everything goes dark.".to_string(),
            };
            self.log.push(line);
            tracing::info!(victor = ?v, round = self.round, "duel resolved");
        }

        victor
    }
}

fn describe_player_strike(strike: &Strike, enemy: &str) -> String {
    match strike.outcome {
        StrikeOutcome::Hit => format!(
            "Your {} takes the {} in the {} for {}.",
            strike.mv.label(),
            enemy,
            strike.zone.label(),
            strike.damage
        ),
        StrikeOutcome::Parried => format!("The {} turns your blade aside.", enemy),
        StrikeOutcome::Evaded => format!(
            "The {} slips away from your {}.",
            enemy,
            strike.mv.label()
        ),
        StrikeOutcome::Riposte => format!(
            "You catch the blow and riposte for {}.",
            strike.damage
        ),
        StrikeOutcome::ParryWhiff => "Your parry cuts empty air.".to_string(),
        StrikeOutcome::GuardHeld => "You hold your guard.".to_string(),
        StrikeOutcome::Dodged => "You give ground, watching for an opening.".to_string(),
    }
}

fn describe_enemy_strike(strike: &Strike, enemy: &str) -> String {
    match strike.outcome {
        StrikeOutcome::Hit => format!(
            "The {}'s {} catches your {} for {}.",
            enemy,
            strike.mv.label(),
            strike.zone.label(),
            strike.damage
        ),
        StrikeOutcome::Parried => format!("You turn the {}'s blade aside.", enemy),
        StrikeOutcome::Evaded => format!("You slip away from the {}'s {}.", enemy, strike.mv.label()),
        StrikeOutcome::Riposte => format!(
            "The {} catches your blow and ripostes for {}.",
            enemy, strike.damage
        ),
        StrikeOutcome::ParryWhiff => format!("The {}'s parry cuts empty air.", enemy),
        StrikeOutcome::GuardHeld => format!("The {} holds their guard.", enemy),
        StrikeOutcome::Dodged => format!("The {} gives ground.", enemy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fresh_duel() -> DuelState {
        DuelState::new(DuelContext::Duel, &EncounterSnapshot::default(), None)
    }

    #[test]
    fn test_duel_opens_in_choose_move() {
        let state = fresh_duel();
        assert_eq!(state.phase, DuelPhase::ChooseMove);
        assert_eq!(state.round, 1);
        assert_eq!(state.enemy_name, "Island Rival");
        assert_eq!(state.enemy_style, AiStyle::Balanced);
        assert!(state.staged_move.is_none());
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_player_baseline_stats() {
        let state = fresh_duel();
        assert_eq!(state.player.hp, 100);
        assert_eq!(state.player.strength, 10);
        assert_eq!(state.player.stamina, 100);
    }

    #[test]
    fn test_boarding_bonus_builds_the_player_up() {
        let mut snapshot = EncounterSnapshot::default();
        snapshot.boarding_bonus = 10;
        let state = DuelState::new(DuelContext::Boarding, &snapshot, None);

        assert_eq!(state.player.strength, 15);
        assert_eq!(state.player.hp, 130);
        assert_eq!(state.player.max_hp, 130);
        assert_eq!(state.enemy_name, "Pirate Crewman");
    }

    #[test]
    fn test_barfight_caps_hp_regardless_of_bonus() {
        let mut snapshot = EncounterSnapshot::default();
        snapshot.boarding_bonus = 10;
        let state = DuelState::new(DuelContext::Barfight, &snapshot, None);

        assert_eq!(state.player.hp, 60);
        assert_eq!(state.player.max_hp, 60);
        // Boarding bonus does not leak into barfights
        assert_eq!(state.player.strength, 10);
    }

    #[test]
    fn test_override_template_wins() {
        let state = DuelState::new(
            DuelContext::Barfight,
            &EncounterSnapshot::default(),
            Some(OpponentTemplate::fort_guard()),
        );
        assert_eq!(state.enemy_name, "Fort Guard");
        assert_eq!(state.enemy_style, AiStyle::Defensive);
    }

    #[test]
    fn test_phase_walk_through_one_round() {
        let mut state = fresh_duel();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(state.select_move(MoveKind::Slash));
        assert_eq!(state.phase, DuelPhase::ChooseZone);

        assert!(state.cancel_move());
        assert_eq!(state.phase, DuelPhase::ChooseMove);
        assert!(state.staged_move.is_none());

        assert!(state.select_move(MoveKind::Parry));
        assert!(state.select_zone(GuardZone::Mid, &mut rng));
        assert_eq!(state.phase, DuelPhase::Animate);
        assert!(state.last_round.is_some());

        // Round one cannot kill either side from full pools
        assert_eq!(state.finish_animation(), DuelPhase::ChooseMove);
        assert_eq!(state.round, 2);
        assert!(state.staged_move.is_none());
        assert!(state.staged_zone.is_none());
    }

    #[test]
    fn test_selection_refused_in_wrong_phase() {
        let mut state = fresh_duel();
        let mut rng = StdRng::seed_from_u64(2);

        assert!(!state.cancel_move());
        assert!(!state.select_zone(GuardZone::High, &mut rng));

        state.select_move(MoveKind::Slash);
        assert!(!state.select_move(MoveKind::Thrust));
    }

    #[test]
    fn test_unaffordable_move_refused() {
        let mut state = fresh_duel();
        state.player.stamina = 34;

        assert!(!state.select_move(MoveKind::Thrust));
        assert_eq!(state.phase, DuelPhase::ChooseMove);

        // Equal stamina still buys the move
        state.player.stamina = 35;
        assert!(state.select_move(MoveKind::Thrust));
    }

    #[test]
    fn test_zone_recorded_after_the_exchange() {
        let mut state = fresh_duel();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(state.last_player_zone.is_none());
        state.select_move(MoveKind::Slash);
        state.select_zone(GuardZone::Low, &mut rng);
        assert_eq!(state.last_player_zone, Some(GuardZone::Low));
    }

    #[test]
    fn test_defensive_opponent_guards_last_round_zone() {
        let mut state = DuelState::new(
            DuelContext::StealthFight,
            &EncounterSnapshot::default(),
            None,
        );
        let mut rng = StdRng::seed_from_u64(4);

        state.select_move(MoveKind::Slash);
        state.select_zone(GuardZone::High, &mut rng);
        state.finish_animation();

        if state.phase == DuelPhase::ChooseMove {
            state.select_move(MoveKind::Slash);
            state.select_zone(GuardZone::Low, &mut rng);
            let report = state.last_round.expect("round resolved");
            // Fort Guard mirrors where the player struck last round
            assert_eq!(report.enemy.zone, GuardZone::High);
        }
    }

    #[test]
    fn test_stamina_nets_out_through_session() {
        let mut state = fresh_duel();
        let mut rng = StdRng::seed_from_u64(5);

        state.select_move(MoveKind::Thrust);
        state.select_zone(GuardZone::Mid, &mut rng);
        assert_eq!(state.player.stamina, 80);
    }

    #[test]
    fn test_mutual_kill_goes_to_the_player() {
        let mut state = fresh_duel();
        state.player.hp = 0;
        state.enemy.hp = 0;
        assert_eq!(state.check_end(), Some(Victor::Player));
        assert!(state.resolved);
    }

    #[test]
    fn test_verdict_sticks() {
        let mut state = fresh_duel();
        state.enemy.hp = 0;
        assert_eq!(state.check_end(), Some(Victor::Player));

        state.player.hp = 0;
        assert_eq!(state.check_end(), Some(Victor::Player));
    }

    #[test]
    fn test_resolved_duel_refuses_moves() {
        let mut state = fresh_duel();
        state.enemy.hp = 0;
        state.check_end();
        assert!(!state.select_move(MoveKind::Slash));
    }

    #[test]
    fn test_animate_leads_to_result_when_someone_drops() {
        // A straw man on one hp who cannot hit back, so the only
        // possible ending is the player's killing blow
        let straw_man = OpponentTemplate {
            name: "Straw Man".to_string(),
            hp: 1,
            strength: 0,
            agility: 5,
            style: AiStyle::Balanced,
        };
        let mut state =
            DuelState::new(DuelContext::Duel, &EncounterSnapshot::default(), Some(straw_man));
        let mut rng = StdRng::seed_from_u64(6);

        // The straw man may dodge or parry for a while; walk rounds
        // until the blow lands, dodging whenever slashing is too dear
        for _ in 0..60 {
            if !state.select_move(MoveKind::Slash) {
                state.select_move(MoveKind::Dodge);
            }
            state.select_zone(GuardZone::Mid, &mut rng);
            if state.finish_animation() == DuelPhase::Result {
                break;
            }
        }

        assert_eq!(state.phase, DuelPhase::Result);
        assert_eq!(state.victor, Some(Victor::Player));
    }

    #[test]
    fn test_return_modes_follow_context() {
        assert_eq!(fresh_duel().return_mode(), ReturnMode::Island);
        let boarding = DuelState::new(DuelContext::Boarding, &EncounterSnapshot::default(), None);
        assert_eq!(boarding.return_mode(), ReturnMode::Overworld);
    }

    #[test]
    fn test_log_ring_evicts_oldest() {
        let mut log = DuelLog::new(4);
        for i in 1..=6 {
            log.push(format!("line {}", i));
        }
        assert_eq!(log.len(), 4);
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines, vec!["line 3", "line 4", "line 5", "line 6"]);
    }

    #[test]
    fn test_duel_log_fills_during_fight() {
        let mut state = fresh_duel();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..3 {
            if state.phase != DuelPhase::ChooseMove {
                break;
            }
            state.select_move(MoveKind::Slash);
            state.select_zone(GuardZone::Mid, &mut rng);
            state.finish_animation();
        }
        assert_eq!(state.log.len(), DUEL_LOG_CAPACITY);
    }
}
