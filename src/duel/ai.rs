//! Opponent move and zone selection
//!
//! One uniform roll walks an ordered band table per style; from the band
//! the roll lands in, the first affordable move going down the table is
//! taken, with dodge as the universal fallback.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::duel::fighter::Fighter;
use crate::duel::moves::{GuardZone, MoveKind};

/// Fighting style of a duel opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiStyle {
    Aggressive,
    Defensive,
    Drunk,
    Balanced,
}

impl AiStyle {
    pub fn all() -> [AiStyle; 4] {
        [
            AiStyle::Aggressive,
            AiStyle::Defensive,
            AiStyle::Drunk,
            AiStyle::Balanced,
        ]
    }

    /// Cumulative probability bands, most preferred first
    fn bands(&self) -> [(f32, MoveKind); 4] {
        match self {
            AiStyle::Aggressive => [
                (0.40, MoveKind::Thrust),
                (0.75, MoveKind::Slash),
                (0.90, MoveKind::Parry),
                (1.0, MoveKind::Dodge),
            ],
            AiStyle::Defensive => [
                (0.40, MoveKind::Parry),
                (0.65, MoveKind::Slash),
                (0.80, MoveKind::Dodge),
                (1.0, MoveKind::Thrust),
            ],
            AiStyle::Drunk => [
                (0.55, MoveKind::Slash),
                (0.70, MoveKind::Thrust),
                (0.85, MoveKind::Dodge),
                (1.0, MoveKind::Parry),
            ],
            AiStyle::Balanced => [
                (0.35, MoveKind::Slash),
                (0.60, MoveKind::Parry),
                (0.80, MoveKind::Thrust),
                (1.0, MoveKind::Dodge),
            ],
        }
    }
}

/// Pick the opponent's move for this round
pub fn choose_move(style: AiStyle, fighter: &Fighter, rng: &mut impl Rng) -> MoveKind {
    let roll: f32 = rng.gen();
    let bands = style.bands();
    let start = bands
        .iter()
        .position(|(cap, _)| roll < *cap)
        .unwrap_or(bands.len() - 1);

    for (_, mv) in &bands[start..] {
        if fighter.can_afford(*mv) {
            return *mv;
        }
    }

    // Too winded for anything else; the stamina floor absorbs the cost
    MoveKind::Dodge
}

/// Pick the zone the opponent works
///
/// Defensive fighters guard wherever the player last struck; everyone
/// else picks uniformly across the three zones.
pub fn choose_zone(
    style: AiStyle,
    last_player_zone: Option<GuardZone>,
    rng: &mut impl Rng,
) -> GuardZone {
    if style == AiStyle::Defensive {
        if let Some(zone) = last_player_zone {
            return zone;
        }
    }

    let zones = GuardZone::all();
    zones[rng.gen_range(0..zones.len())]
}
