//! Trajectory model property tests
//!
//! The flight model has to hold across the whole power slider, not just
//! at spot values, so these sweep the range with proptest.

use proptest::prelude::*;

use corsair::broadside::{flight_time, grade_shot, position_at, LaunchParams, ShotGrade};
use corsair::core::types::{CompassDirection, Wind};

proptest! {
    /// Every charge, however weak, lofts the ball for some positive time
    #[test]
    fn flight_time_is_positive(power in 0.0f32..=100.0) {
        let params = LaunchParams::from_power(power);
        prop_assert!(flight_time(&params) > 0.0);
    }

    /// More powder never shortens the flight
    #[test]
    fn flight_time_rises_with_power(a in 0.0f32..=100.0, b in 0.0f32..=100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let t_lo = flight_time(&LaunchParams::from_power(lo));
        let t_hi = flight_time(&LaunchParams::from_power(hi));
        prop_assert!(t_hi >= t_lo, "flight shrank: {} at {} vs {} at {}", t_lo, lo, t_hi, hi);
    }

    /// With no wind the ball is back at deck height when the flight ends
    #[test]
    fn ball_returns_to_deck(power in 0.0f32..=100.0) {
        let params = LaunchParams::from_power(power);
        let splash = position_at(&params, &Wind::calm(), flight_time(&params));
        prop_assert!(splash.y.abs() < 1e-3, "y = {}", splash.y);
    }

    /// Wind pushes the ball sideways and touches nothing else
    #[test]
    fn wind_drift_is_lateral_only(power in 0.0f32..=100.0, strength in 0.0f32..=1.0) {
        let params = LaunchParams::from_power(power);
        let t = flight_time(&params);
        let calm = position_at(&params, &Wind::calm(), t);
        let blown = position_at(&params, &Wind::new(CompassDirection::East, strength), t);

        prop_assert!((blown.x - strength * 0.3 * t).abs() < 1e-4);
        prop_assert_eq!(blown.y, calm.y);
        prop_assert_eq!(blown.z, calm.z);
    }
}

/// Grading rides on distance from the aim point alone
#[test]
fn grading_bands_follow_landing_distance() {
    // 3-4-5 triangle: 5 yards out is still inside the hull
    assert_eq!(grade_shot(3.0, 4.0), ShotGrade::Direct);
    assert_eq!(grade_shot(0.0, 5.9), ShotGrade::Direct);
    assert_eq!(grade_shot(6.0, 0.0), ShotGrade::NearMiss);
    assert_eq!(grade_shot(0.0, 11.9), ShotGrade::NearMiss);
    assert_eq!(grade_shot(12.0, 0.0), ShotGrade::Miss);
    assert_eq!(grade_shot(-20.0, 0.0), ShotGrade::Miss);
}
