//! Duel constants - player baseline and the stamina economy

// Player baseline
pub const PLAYER_BASE_STRENGTH: u32 = 10;
pub const PLAYER_BASE_HP: u32 = 100;
pub const BASE_STAMINA: u32 = 100;

// Boarding actions scale with the crew at your back
pub const BOARDING_STRENGTH_DIVISOR: u32 = 2; // bonus / 2 extra strength
pub const BOARDING_HP_MULT: u32 = 3; // bonus * 3 extra hp

// Barfights start sloppy and end fast
pub const BARFIGHT_HP: u32 = 60;

// Stamina economy
pub const STAMINA_REGEN: u32 = 15;

// Damage scaling
pub const STRENGTH_DAMAGE_DIVISOR: f32 = 10.0;
pub const ATTACK_VARIANCE_BASE: f32 = 0.8;
pub const ATTACK_VARIANCE_RANGE: f32 = 0.4;

// Round narration kept on screen
pub const DUEL_LOG_CAPACITY: usize = 4;
