//! Cannonball trajectory model
//!
//! Parabolic flight scaled by firing power, with lateral wind drift.
//! Axes: z downrange toward the target, y vertical, x lateral.

use serde::{Deserialize, Serialize};

use crate::broadside::constants::{
    BASE_LAUNCH_ANGLE, BASE_LAUNCH_SPEED, GRAVITY, HIT_RADIUS, LAUNCH_ANGLE_RANGE,
    LAUNCH_SPEED_RANGE, NEAR_MISS_QUALITY, NEAR_MISS_RADIUS, VERTICAL_BOOST, WIND_DRIFT_FACTOR,
};
use crate::core::types::Wind;

/// Launch parameters derived from firing power (0-100)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Downrange speed
    pub vel_z: f32,
    /// Elevation in radians
    pub angle: f32,
    /// Vertical speed
    pub vel_y: f32,
}

impl LaunchParams {
    pub fn from_power(power: f32) -> Self {
        let charge = power / 100.0;
        let vel_z = BASE_LAUNCH_SPEED + charge * LAUNCH_SPEED_RANGE;
        let angle = BASE_LAUNCH_ANGLE + charge * LAUNCH_ANGLE_RANGE;
        let vel_y = angle.sin() * vel_z * VERTICAL_BOOST;
        Self { vel_z, angle, vel_y }
    }
}

/// A point on the ball's flight path
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Position at `t` seconds after firing
pub fn position_at(params: &LaunchParams, wind: &Wind, t: f32) -> TrajectoryPoint {
    TrajectoryPoint {
        x: wind.strength * WIND_DRIFT_FACTOR * t,
        y: params.vel_y * t + 0.5 * GRAVITY * t * t,
        z: params.vel_z * t,
    }
}

/// Time until the ball returns to deck height
pub fn flight_time(params: &LaunchParams) -> f32 {
    -2.0 * params.vel_y / GRAVITY
}

/// Downrange distance covered over the full flight
pub fn landing_distance(params: &LaunchParams) -> f32 {
    params.vel_z * flight_time(params)
}

/// How close the ball landed to the aim point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotGrade {
    Direct,
    NearMiss,
    Miss,
}

impl ShotGrade {
    /// Damage quality factor for this grade
    pub fn quality(&self) -> f32 {
        match self {
            ShotGrade::Direct => 1.0,
            ShotGrade::NearMiss => NEAR_MISS_QUALITY,
            ShotGrade::Miss => 0.0,
        }
    }

    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotGrade::Miss)
    }
}

/// Grade a shot by how far it landed from the aim point
pub fn grade_shot(offset_x: f32, offset_y: f32) -> ShotGrade {
    let distance = offset_x.hypot(offset_y);
    if distance < HIT_RADIUS {
        ShotGrade::Direct
    } else if distance < NEAR_MISS_RADIUS {
        ShotGrade::NearMiss
    } else {
        ShotGrade::Miss
    }
}
