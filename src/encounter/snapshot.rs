//! Read-only view of the player's situation, handed in by the campaign layer
//!
//! Combat never reaches back into campaign state; everything it is allowed
//! to know arrives through this snapshot.

use serde::{Deserialize, Serialize};

use crate::broadside::constants::DEFAULT_CREW;
use crate::core::types::{ShipId, Wind};

/// An escort sailing with the player's convoy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscortShip {
    pub id: ShipId,
    pub hull: u32,
}

impl EscortShip {
    pub fn new(hull: u32) -> Self {
        Self {
            id: ShipId::new(),
            hull,
        }
    }

    pub fn is_afloat(&self) -> bool {
        self.hull > 0
    }
}

/// Everything combat needs to know about the player going in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub hull: u32,
    pub max_hull: u32,
    /// Sailors aboard; None falls back to the standard complement
    pub crew: Option<u32>,
    pub max_crew: Option<u32>,
    /// Extra cannon granted by shipyard upgrades
    pub cannon_bonus: u32,
    pub escorts: Vec<EscortShip>,
    /// Escorts only run out their guns while the convoy holds formation
    pub convoy_active: bool,
    /// Masts on the flagship; None falls back to the standard rig
    pub flagship_masts: Option<u32>,
    pub wind: Wind,
    /// Crew-derived bonus applied to boarding duels
    pub boarding_bonus: u32,
}

impl EncounterSnapshot {
    /// A lone ship with no upgrades, escorts, or wind
    pub fn solo(hull: u32, max_hull: u32) -> Self {
        Self {
            hull,
            max_hull,
            crew: None,
            max_crew: None,
            cannon_bonus: 0,
            escorts: Vec::new(),
            convoy_active: false,
            flagship_masts: None,
            wind: Wind::calm(),
            boarding_bonus: 0,
        }
    }

    /// Crew aboard, falling back to the standard complement
    pub fn crew_or_default(&self) -> (u32, u32) {
        (
            self.crew.unwrap_or(DEFAULT_CREW),
            self.max_crew.unwrap_or(DEFAULT_CREW),
        )
    }

    /// One extra cannon per escort still afloat, convoy permitting
    pub fn escort_cannons(&self) -> u32 {
        if !self.convoy_active {
            return 0;
        }
        self.escorts.iter().filter(|e| e.is_afloat()).count() as u32
    }
}

impl Default for EncounterSnapshot {
    fn default() -> Self {
        Self::solo(100, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_defaults_to_standard_complement() {
        let snapshot = EncounterSnapshot::solo(80, 100);
        assert_eq!(snapshot.crew_or_default(), (30, 30));
    }

    #[test]
    fn test_explicit_crew_respected() {
        let mut snapshot = EncounterSnapshot::solo(80, 100);
        snapshot.crew = Some(18);
        snapshot.max_crew = Some(40);
        assert_eq!(snapshot.crew_or_default(), (18, 40));
    }

    #[test]
    fn test_escort_cannons_require_active_convoy() {
        let mut snapshot = EncounterSnapshot::solo(100, 100);
        snapshot.escorts = vec![EscortShip::new(50), EscortShip::new(0), EscortShip::new(30)];

        assert_eq!(snapshot.escort_cannons(), 0);
        snapshot.convoy_active = true;
        // The sunk escort contributes nothing
        assert_eq!(snapshot.escort_cannons(), 2);
    }
}
