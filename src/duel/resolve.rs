//! Simultaneous round resolution
//!
//! Both directions are computed from the pre-round state before anything
//! is applied: a fighter cut down this round still lands their own blow.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::duel::constants::{
    ATTACK_VARIANCE_BASE, ATTACK_VARIANCE_RANGE, STRENGTH_DAMAGE_DIVISOR,
};
use crate::duel::fighter::Fighter;
use crate::duel::moves::{GuardZone, MoveKind};

/// What one side's move came to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeOutcome {
    /// Attack landed
    Hit,
    /// Attack turned by a matching parry
    Parried,
    /// Attack wasted on a dodging opponent
    Evaded,
    /// Parry caught the blow and answered
    Riposte,
    /// Parried where no blow fell
    ParryWhiff,
    /// Parry against a non-attack; guard simply held
    GuardHeld,
    /// Kept distance
    Dodged,
}

/// One direction of the exchange
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Strike {
    pub mv: MoveKind,
    pub zone: GuardZone,
    pub outcome: StrikeOutcome,
    pub damage: u32,
}

/// Both directions of one resolved round
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundReport {
    pub player: Strike,
    pub enemy: Strike,
}

/// Compute what one side's move achieves against the other's choice
///
/// Does NOT mutate - `resolve_round` applies both directions together.
fn strike(
    attacker: &Fighter,
    mv: MoveKind,
    zone: GuardZone,
    foe_move: MoveKind,
    foe_zone: GuardZone,
    rng: &mut impl Rng,
) -> Strike {
    let strength_scale = attacker.strength as f32 / STRENGTH_DAMAGE_DIVISOR;

    let (outcome, damage) = match mv {
        MoveKind::Dodge => (StrikeOutcome::Dodged, 0),

        MoveKind::Parry => {
            if foe_move.is_attack() && zone == foe_zone {
                let (lo, hi) = mv.riposte_range();
                let roll = rng.gen_range(lo..=hi) as f32;
                (StrikeOutcome::Riposte, (roll * strength_scale).round() as u32)
            } else if foe_move.is_attack() {
                (StrikeOutcome::ParryWhiff, 0)
            } else {
                (StrikeOutcome::GuardHeld, 0)
            }
        }

        MoveKind::Slash | MoveKind::Thrust => {
            let blocked = foe_move == MoveKind::Dodge
                || (foe_move == MoveKind::Parry && zone == foe_zone);
            if blocked {
                let outcome = if foe_move == MoveKind::Dodge {
                    StrikeOutcome::Evaded
                } else {
                    StrikeOutcome::Parried
                };
                (outcome, 0)
            } else {
                let (lo, hi) = mv.damage_range();
                let roll = rng.gen_range(lo..=hi) as f32;
                let variance = ATTACK_VARIANCE_BASE + rng.gen::<f32>() * ATTACK_VARIANCE_RANGE;
                let damage = (roll * strength_scale * variance).round() as u32;
                (StrikeOutcome::Hit, damage)
            }
        }
    };

    Strike {
        mv,
        zone,
        outcome,
        damage,
    }
}

/// Resolve one full exchange and apply it to both fighters
///
/// Damage lands on both sides, then each pays its move's stamina cost
/// (flooring at zero) and catches the flat breath-back, capped at max.
pub fn resolve_round(
    player: &mut Fighter,
    player_move: MoveKind,
    player_zone: GuardZone,
    enemy: &mut Fighter,
    enemy_move: MoveKind,
    enemy_zone: GuardZone,
    rng: &mut impl Rng,
) -> RoundReport {
    let player_strike = strike(player, player_move, player_zone, enemy_move, enemy_zone, rng);
    let enemy_strike = strike(enemy, enemy_move, enemy_zone, player_move, player_zone, rng);

    enemy.take_damage(player_strike.damage);
    player.take_damage(enemy_strike.damage);

    player.spend_and_recover(player_move.stamina_cost());
    enemy.spend_and_recover(enemy_move.stamina_cost());

    RoundReport {
        player: player_strike,
        enemy: enemy_strike,
    }
}
