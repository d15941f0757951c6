//! Ammunition types and the shot locker
//!
//! Each shot type trades hull damage against crew and rigging damage.
//! Iron batters hulls, chain shears masts, grape sweeps decks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::broadside::constants::{STARTING_CHAIN, STARTING_GRAPE, STARTING_IRON};
use crate::core::error::CorsairError;

/// Cannon ammunition choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoType {
    Iron,
    Chain,
    Grape,
}

impl AmmoType {
    pub fn all() -> [AmmoType; 3] {
        [AmmoType::Iron, AmmoType::Chain, AmmoType::Grape]
    }

    /// Hull damage bounds per shot, before scaling
    pub fn hull_damage(&self) -> (u32, u32) {
        match self {
            AmmoType::Iron => (15, 25),
            AmmoType::Chain => (5, 10),
            AmmoType::Grape => (2, 5),
        }
    }

    /// Crew damage bounds per shot, before scaling
    pub fn crew_damage(&self) -> (u32, u32) {
        match self {
            AmmoType::Iron => (0, 3),
            AmmoType::Chain => (0, 2),
            AmmoType::Grape => (8, 15),
        }
    }

    /// Whether this shot type can bring a mast down at all
    pub fn shears_masts(&self) -> bool {
        matches!(self, AmmoType::Chain)
    }

    /// Rounds carried at the start of an engagement
    pub fn starting_rounds(&self) -> u32 {
        match self {
            AmmoType::Iron => STARTING_IRON,
            AmmoType::Chain => STARTING_CHAIN,
            AmmoType::Grape => STARTING_GRAPE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AmmoType::Iron => "iron shot",
            AmmoType::Chain => "chain shot",
            AmmoType::Grape => "grapeshot",
        }
    }
}

impl FromStr for AmmoType {
    type Err = CorsairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iron" => Ok(AmmoType::Iron),
            "chain" => Ok(AmmoType::Chain),
            "grape" => Ok(AmmoType::Grape),
            _ => Err(CorsairError::UnknownAmmoType(s.to_string())),
        }
    }
}

/// Rounds remaining per shot type; never goes negative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoLocker {
    iron: u32,
    chain: u32,
    grape: u32,
}

impl AmmoLocker {
    /// Standard loadout for a player broadside
    pub fn standard() -> Self {
        Self {
            iron: AmmoType::Iron.starting_rounds(),
            chain: AmmoType::Chain.starting_rounds(),
            grape: AmmoType::Grape.starting_rounds(),
        }
    }

    pub fn remaining(&self, ammo: AmmoType) -> u32 {
        match ammo {
            AmmoType::Iron => self.iron,
            AmmoType::Chain => self.chain,
            AmmoType::Grape => self.grape,
        }
    }

    /// Expend one round; floors at zero
    pub fn spend(&mut self, ammo: AmmoType) {
        let slot = match ammo {
            AmmoType::Iron => &mut self.iron,
            AmmoType::Chain => &mut self.chain,
            AmmoType::Grape => &mut self.grape,
        };
        *slot = slot.saturating_sub(1);
    }

    pub fn is_empty(&self) -> bool {
        self.iron == 0 && self.chain == 0 && self.grape == 0
    }
}

impl Default for AmmoLocker {
    fn default() -> Self {
        Self::standard()
    }
}
