//! Broadside combat constants - all tunable values in one place
//!
//! Damage bounds are per-shot rolls BEFORE power/quality/cannon scaling.

// Trajectory (axes: z downrange, y vertical, x lateral)
pub const GRAVITY: f32 = -4.0; // world units per second squared, negative is down
pub const BASE_LAUNCH_SPEED: f32 = 2.0;
pub const LAUNCH_SPEED_RANGE: f32 = 8.0; // added at full power
pub const BASE_LAUNCH_ANGLE: f32 = 0.2; // radians
pub const LAUNCH_ANGLE_RANGE: f32 = 0.6; // added at full power
pub const VERTICAL_BOOST: f32 = 1.5;
pub const WIND_DRIFT_FACTOR: f32 = 0.3;

// Shot grading (world units from the aim point)
pub const HIT_RADIUS: f32 = 6.0;
pub const NEAR_MISS_RADIUS: f32 = 12.0;
pub const NEAR_MISS_QUALITY: f32 = 0.4;

// Player loadout
pub const STARTING_IRON: u32 = 20;
pub const STARTING_CHAIN: u32 = 8;
pub const STARTING_GRAPE: u32 = 8;
pub const BASE_CANNONS: u32 = 2;
pub const CANNON_DAMAGE_DIVISOR: f32 = 2.0;
pub const DEFAULT_CREW: u32 = 30;
pub const DEFAULT_MASTS: u32 = 2;

// Chain shot only shears rigging on a hard, well-aimed hit
pub const CHAIN_MAST_POWER_THRESHOLD: f32 = 60.0;

// Enemy gunnery
pub const ENEMY_BASE_ACCURACY: f32 = 0.5;
pub const ENEMY_CREW_ACCURACY_BONUS: f32 = 0.3; // at full crew
pub const ENEMY_HULL_DAMAGE_MIN: u32 = 8;
pub const ENEMY_HULL_DAMAGE_MAX: u32 = 20;
pub const ENEMY_CREW_DAMAGE_MAX: u32 = 4;
pub const ENEMY_MAST_HIT_CHANCE: f32 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading_radii_ordered() {
        assert!(HIT_RADIUS > 0.0);
        assert!(NEAR_MISS_RADIUS > HIT_RADIUS);
    }

    #[test]
    fn test_launch_scaling_positive() {
        assert!(BASE_LAUNCH_SPEED > 0.0);
        assert!(LAUNCH_SPEED_RANGE > 0.0);
        assert!(BASE_LAUNCH_ANGLE > 0.0);
    }

    #[test]
    fn test_enemy_accuracy_stays_a_probability() {
        assert!(ENEMY_BASE_ACCURACY + ENEMY_CREW_ACCURACY_BONUS <= 1.0);
    }

    #[test]
    fn test_starting_loadout_positive() {
        assert!(STARTING_IRON > 0);
        assert!(STARTING_CHAIN > 0);
        assert!(STARTING_GRAPE > 0);
    }
}
