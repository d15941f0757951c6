//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for ships (player vessel, escorts, prizes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId(pub Uuid);

impl ShipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShipId {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight-way compass heading, used for wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    pub fn all() -> [CompassDirection; 8] {
        [
            CompassDirection::North,
            CompassDirection::NorthEast,
            CompassDirection::East,
            CompassDirection::SouthEast,
            CompassDirection::South,
            CompassDirection::SouthWest,
            CompassDirection::West,
            CompassDirection::NorthWest,
        ]
    }

    /// Lowercase label for log lines ("the wind blows from the north-east")
    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::North => "north",
            CompassDirection::NorthEast => "north-east",
            CompassDirection::East => "east",
            CompassDirection::SouthEast => "south-east",
            CompassDirection::South => "south",
            CompassDirection::SouthWest => "south-west",
            CompassDirection::West => "west",
            CompassDirection::NorthWest => "north-west",
        }
    }
}

/// Prevailing wind during an encounter
///
/// Strength drives lateral shot drift; direction is flavor for the log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wind {
    pub direction: CompassDirection,
    pub strength: f32,
}

impl Wind {
    pub fn new(direction: CompassDirection, strength: f32) -> Self {
        Self { direction, strength }
    }

    /// Dead calm: no drift at all
    pub fn calm() -> Self {
        Self {
            direction: CompassDirection::North,
            strength: 0.0,
        }
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}

/// Which side won a resolved combat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victor {
    Player,
    Enemy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_ids_unique() {
        assert_ne!(ShipId::new(), ShipId::new());
    }

    #[test]
    fn test_compass_covers_eight_points() {
        assert_eq!(CompassDirection::all().len(), 8);
    }

    #[test]
    fn test_calm_wind_has_no_strength() {
        assert_eq!(Wind::calm().strength, 0.0);
    }
}
