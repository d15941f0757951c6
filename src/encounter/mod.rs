//! Thin orchestration over the combat engines
//!
//! The interactive game drives sessions itself; these auto-resolution
//! drivers exist for the headless runner, balance checks, and tests.
//! They own the loop and the safety caps, nothing else.

pub mod snapshot;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::broadside::{AmmoType, BroadsideState, ShipState};
use crate::core::config::config;
use crate::core::types::Victor;
use crate::duel::{
    ai, AiStyle, DuelContext, DuelPhase, DuelState, GuardZone, MoveKind, OpponentTemplate,
    ReturnMode,
};

pub use snapshot::{EncounterSnapshot, EscortShip};

/// How the auto-resolver lays the player's guns each round
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum GunneryPolicy {
    /// Dead-on aim at the given power
    PerfectAim { power: f32 },
    /// Fixed landing offset, for exercising the near-miss band
    FixedOffset { x: f32, y: f32, power: f32 },
}

impl GunneryPolicy {
    fn lay_guns(&self, state: &mut BroadsideState) {
        match *self {
            GunneryPolicy::PerfectAim { power } => {
                state.set_aim(0.0, 0.0);
                state.set_power(power);
            }
            GunneryPolicy::FixedOffset { x, y, power } => {
                state.set_aim(x, y);
                state.set_power(power);
            }
        }
    }
}

/// How the auto-resolver fights the player's side of a duel
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum DuelPolicy {
    /// The same move every round, dodging when it cannot be paid for;
    /// zones rotate so defensive opponents get something to read
    Fixed { mv: MoveKind },
    /// Plays like an opponent of the given style
    Styled { style: AiStyle },
}

/// Summary of an auto-resolved broadside
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadsideOutcome {
    /// None when the safety cap cut the engagement short
    pub victor: Option<Victor>,
    pub rounds: u32,
    pub enemy_name: String,
    pub player: ShipState,
    pub enemy: ShipState,
}

/// Summary of an auto-resolved duel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelOutcome {
    /// None when the safety cap cut the fight short
    pub victor: Option<Victor>,
    pub rounds: u32,
    pub enemy_name: String,
    pub return_mode: ReturnMode,
    pub player_hp: u32,
    pub enemy_hp: u32,
}

/// A broadside pressed home into a boarding action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidOutcome {
    pub broadside: BroadsideOutcome,
    /// Boarding only happens when the guns carried the day
    pub boarding: Option<DuelOutcome>,
}

/// Run a broadside to its end, capped by the configured round limit
pub fn auto_broadside(
    state: &mut BroadsideState,
    policy: &GunneryPolicy,
    ammo: AmmoType,
    rng: &mut impl Rng,
) -> BroadsideOutcome {
    let cap = config().broadside_round_cap;
    let damage_mult = config().enemy_damage_mult;

    state.set_ammo(ammo);
    for _ in 0..cap {
        policy.lay_guns(state);
        let report = state.player_volley(rng);
        state.apply_volley(report);
        if state.check_end().is_some() {
            break;
        }

        state.enemy_fire(damage_mult, rng);
        if state.check_end().is_some() {
            break;
        }

        state.advance_round();
    }

    tracing::info!(
        victor = ?state.victor,
        rounds = state.round,
        "broadside auto-resolved"
    );

    BroadsideOutcome {
        victor: state.victor,
        rounds: state.round,
        enemy_name: state.enemy_name.clone(),
        player: state.player.clone(),
        enemy: state.enemy.clone(),
    }
}

/// Run a duel to its end, capped by the configured round limit
pub fn auto_duel(state: &mut DuelState, policy: &DuelPolicy, rng: &mut impl Rng) -> DuelOutcome {
    let cap = config().duel_round_cap;
    let zones = GuardZone::all();

    for turn in 0..cap {
        if state.phase != DuelPhase::ChooseMove {
            break;
        }

        let mv = match *policy {
            DuelPolicy::Fixed { mv } => mv,
            DuelPolicy::Styled { style } => ai::choose_move(style, &state.player, rng),
        };
        if !state.select_move(mv) && !state.select_move(MoveKind::Dodge) {
            break;
        }

        let zone = match *policy {
            DuelPolicy::Fixed { .. } => zones[(turn as usize) % zones.len()],
            DuelPolicy::Styled { .. } => zones[rng.gen_range(0..zones.len())],
        };
        if !state.select_zone(zone, rng) {
            break;
        }

        if state.finish_animation() == DuelPhase::Result {
            break;
        }
    }

    tracing::info!(victor = ?state.victor, rounds = state.round, "duel auto-resolved");

    DuelOutcome {
        victor: state.victor,
        rounds: state.round,
        enemy_name: state.enemy_name.clone(),
        return_mode: state.return_mode(),
        player_hp: state.player.hp,
        enemy_hp: state.enemy.hp,
    }
}

/// A full raid: trade broadsides, and board if the guns win through
pub fn auto_raid(
    snapshot: &EncounterSnapshot,
    gunnery: &GunneryPolicy,
    ammo: AmmoType,
    blades: &DuelPolicy,
    rng: &mut impl Rng,
) -> RaidOutcome {
    let mut ship_fight = BroadsideState::new(snapshot, rng);
    let broadside = auto_broadside(&mut ship_fight, gunnery, ammo, rng);

    let boarding = if broadside.victor == Some(Victor::Player) {
        let mut duel = DuelState::new(DuelContext::Boarding, snapshot, None);
        Some(auto_duel(&mut duel, blades, rng))
    } else {
        None
    };

    RaidOutcome { broadside, boarding }
}
