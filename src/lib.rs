//! Corsair - Age of Sail Piracy Combat Engine

pub mod broadside;
pub mod core;
pub mod duel;
pub mod encounter;
