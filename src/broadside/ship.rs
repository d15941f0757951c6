//! Ship state and the hostile roster
//!
//! Pools clamp to [0, max] by saturating arithmetic; hull or crew hitting
//! zero is what ends an engagement, masts only slow the prize down.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hull/crew/mast pools for one side of a broadside exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipState {
    pub hull: u32,
    pub max_hull: u32,
    pub crew: u32,
    pub max_crew: u32,
    pub masts: u32,
    pub max_masts: u32,
    pub cannons: u32,
}

impl ShipState {
    /// Fresh ship with full pools
    pub fn new(hull: u32, crew: u32, masts: u32, cannons: u32) -> Self {
        Self {
            hull,
            max_hull: hull,
            crew,
            max_crew: crew,
            masts,
            max_masts: masts,
            cannons,
        }
    }

    /// Apply a volley's worth of damage; every pool floors at zero
    pub fn take_damage(&mut self, hull: u32, crew: u32, masts: u32) {
        self.hull = self.hull.saturating_sub(hull);
        self.crew = self.crew.saturating_sub(crew);
        self.masts = self.masts.saturating_sub(masts);
    }

    /// Out of the fight: hull breached or no one left to sail her
    pub fn is_beaten(&self) -> bool {
        self.hull == 0 || self.crew == 0
    }

    /// Fraction of crew still standing, 0.0 - 1.0
    pub fn crew_fraction(&self) -> f32 {
        if self.max_crew == 0 {
            return 0.0;
        }
        self.crew as f32 / self.max_crew as f32
    }
}

/// Immutable stat block for a hostile ship
///
/// Cloned into a fresh `ShipState` when an engagement opens.
#[derive(Debug, Clone, Copy)]
pub struct EnemyShipTemplate {
    pub name: &'static str,
    pub hull: u32,
    pub crew: u32,
    pub masts: u32,
    pub cannons: u32,
}

impl EnemyShipTemplate {
    pub fn to_ship(&self) -> ShipState {
        ShipState::new(self.hull, self.crew, self.masts, self.cannons)
    }

    pub fn roster() -> &'static [EnemyShipTemplate] {
        &ROSTER
    }

    /// Draw a hostile uniformly from the roster
    pub fn pick(rng: &mut impl Rng) -> &'static EnemyShipTemplate {
        &ROSTER[rng.gen_range(0..ROSTER.len())]
    }
}

const ROSTER: [EnemyShipTemplate; 6] = [
    EnemyShipTemplate {
        name: "Revenue Cutter",
        hull: 50,
        crew: 25,
        masts: 1,
        cannons: 4,
    },
    EnemyShipTemplate {
        name: "Smuggler's Sloop",
        hull: 60,
        crew: 35,
        masts: 1,
        cannons: 6,
    },
    EnemyShipTemplate {
        name: "Merchant Brig",
        hull: 70,
        crew: 30,
        masts: 2,
        cannons: 6,
    },
    EnemyShipTemplate {
        name: "Corsair Galley",
        hull: 85,
        crew: 45,
        masts: 2,
        cannons: 8,
    },
    EnemyShipTemplate {
        name: "Treasure Galleon",
        hull: 100,
        crew: 40,
        masts: 3,
        cannons: 10,
    },
    EnemyShipTemplate {
        name: "Navy Frigate",
        hull: 120,
        crew: 60,
        masts: 3,
        cannons: 12,
    },
];
