//! Blade-to-blade melee combat
//!
//! Simultaneous exchanges: both sides pick a move and a zone, both blows
//! are computed from the pre-round state, then damage and stamina land
//! together. The opponent is driven by a style-weighted AI.

pub mod ai;
pub mod constants;
pub mod fighter;
pub mod moves;
pub mod resolve;
pub mod session;

pub use ai::AiStyle;
pub use constants::*;
pub use fighter::{DuelContext, Fighter, OpponentTemplate, ReturnMode};
pub use moves::{GuardZone, MoveKind};
pub use resolve::{resolve_round, RoundReport, Strike, StrikeOutcome};
pub use session::{DuelLog, DuelPhase, DuelState};
