pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, CombatConfig};
pub use error::{CorsairError, Result};
pub use types::{CompassDirection, ShipId, Victor, Wind};
