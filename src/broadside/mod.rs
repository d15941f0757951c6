//! Ship-to-ship broadside combat
//!
//! Round-based cannon exchange: the player lays aim, power, and shot type
//! against a hostile drawn from the roster; the enemy answers with return
//! fire whose accuracy rides on its remaining crew.

pub mod ammo;
pub mod constants;
pub mod session;
pub mod ship;
pub mod trajectory;

pub use ammo::{AmmoLocker, AmmoType};
pub use constants::*;
pub use session::{BroadsideLog, BroadsideState, ShotReport, ShotSource};
pub use ship::{EnemyShipTemplate, ShipState};
pub use trajectory::{
    flight_time, grade_shot, landing_distance, position_at, LaunchParams, ShotGrade,
    TrajectoryPoint,
};
