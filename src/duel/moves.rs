//! Sword moves and guard zones
//!
//! Four moves, three zones. Every interaction is an exact zone match:
//! a parry only counts where the blow actually falls.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CorsairError;

/// What a fighter does with their round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Slash,
    Thrust,
    Parry,
    Dodge,
}

impl MoveKind {
    pub fn all() -> [MoveKind; 4] {
        [
            MoveKind::Slash,
            MoveKind::Thrust,
            MoveKind::Parry,
            MoveKind::Dodge,
        ]
    }

    /// Damage bounds before strength and variance scaling; (0, 0) for
    /// moves that do not attack
    pub fn damage_range(&self) -> (u32, u32) {
        match self {
            MoveKind::Slash => (15, 25),
            MoveKind::Thrust => (25, 40),
            MoveKind::Parry => (0, 0),
            MoveKind::Dodge => (0, 0),
        }
    }

    pub fn stamina_cost(&self) -> u32 {
        match self {
            MoveKind::Slash => 20,
            MoveKind::Thrust => 35,
            MoveKind::Parry => 15,
            MoveKind::Dodge => 10,
        }
    }

    /// Counter-damage bounds when a parry catches a blow
    pub fn riposte_range(&self) -> (u32, u32) {
        match self {
            MoveKind::Parry => (20, 30),
            _ => (0, 0),
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, MoveKind::Slash | MoveKind::Thrust)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoveKind::Slash => "slash",
            MoveKind::Thrust => "thrust",
            MoveKind::Parry => "parry",
            MoveKind::Dodge => "dodge",
        }
    }
}

impl FromStr for MoveKind {
    type Err = CorsairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slash" => Ok(MoveKind::Slash),
            "thrust" => Ok(MoveKind::Thrust),
            "parry" => Ok(MoveKind::Parry),
            "dodge" => Ok(MoveKind::Dodge),
            _ => Err(CorsairError::UnknownMoveId(s.to_string())),
        }
    }
}

/// Where a blow falls or a guard sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardZone {
    High,
    Mid,
    Low,
}

impl GuardZone {
    pub fn all() -> [GuardZone; 3] {
        [GuardZone::High, GuardZone::Mid, GuardZone::Low]
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuardZone::High => "head",
            GuardZone::Mid => "chest",
            GuardZone::Low => "legs",
        }
    }
}

impl FromStr for GuardZone {
    type Err = CorsairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(GuardZone::High),
            "mid" => Ok(GuardZone::Mid),
            "low" => Ok(GuardZone::Low),
            _ => Err(CorsairError::UnknownZone(s.to_string())),
        }
    }
}
