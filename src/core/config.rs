//! Combat configuration with documented constants
//!
//! All difficulty and pacing knobs are collected here with explanations of
//! their purpose and how they interact with each other.

/// Configuration for the combat engines
///
/// These values have been tuned against the standard difficulty curve.
/// Changing them will affect combat pacing and lethality.
#[derive(Debug, Clone)]
pub struct CombatConfig {
    // === DIFFICULTY ===
    /// Multiplier applied to enemy broadside damage rolls
    ///
    /// At 1.0 the enemy's hull/crew/mast rolls land as tabled.
    /// Values above 1.0 make return fire hit harder; the campaign
    /// layer raises this on harder routes.
    pub enemy_damage_mult: f32,

    // === AUTO-RESOLVE CAPS ===
    /// Safety cap on broadside rounds during auto-resolution
    ///
    /// At power 100 with direct hits the slowest enemy dies well
    /// inside this cap; the cap exists so a pathological policy
    /// (never firing, always missing) cannot loop forever.
    pub broadside_round_cap: u32,

    /// Safety cap on duel rounds during auto-resolution
    ///
    /// Mutual avoidance (both sides dodging) makes no progress, so
    /// a cap is needed; fixed policies against any style finish in
    /// well under half of this.
    pub duel_round_cap: u32,

    // === PACING ===
    /// How long the caller should hold the duel's animate phase (seconds)
    ///
    /// Pure display pacing; the engine itself never sleeps.
    pub impact_pause_secs: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            // Standard difficulty
            enemy_damage_mult: 1.0,

            // Auto-resolve caps
            broadside_round_cap: 50,
            duel_round_cap: 100,

            // Pacing
            impact_pause_secs: 0.8,
        }
    }
}

impl CombatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.enemy_damage_mult <= 0.0 || self.enemy_damage_mult > 5.0 {
            return Err(format!(
                "enemy_damage_mult ({}) should be in (0, 5]",
                self.enemy_damage_mult
            ));
        }

        if self.broadside_round_cap == 0 || self.duel_round_cap == 0 {
            return Err("Round caps must be at least 1".into());
        }

        if self.impact_pause_secs < 0.0 {
            return Err(format!(
                "impact_pause_secs ({}) must not be negative",
                self.impact_pause_secs
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<CombatConfig> = OnceLock::new();

/// Get the global combat config (initializes with defaults if not set)
pub fn config() -> &'static CombatConfig {
    CONFIG.get_or_init(CombatConfig::default)
}

/// Set the global combat config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: CombatConfig) -> Result<(), CombatConfig> {
    CONFIG.set(config)
}
