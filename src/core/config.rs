//! Simulation configuration with documented constants
//!
//! Every tunable of the yearly progression, the economy roll and the game
//! clock lives here. Defaults reproduce the stock rules; a TOML file can
//! override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LifeSimError, Result};

/// Configuration for the simulation systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === LIFECYCLE ===
    /// Age every new character starts at
    pub starting_age: u32,

    /// Age at which the run ends regardless of health
    pub game_over_age: u32,

    // === FERTILITY ===
    /// Female fertility starts declining once age exceeds this
    pub female_fertility_decline_age: u32,

    /// Base of the compounding female decline: `base^(age - decline_age)`
    /// is subtracted every year past the threshold.
    pub female_fertility_decline_base: f32,

    /// Male fertility starts declining once age exceeds this
    pub male_fertility_decline_age: u32,

    /// Linear male decline: `rate * (age - decline_age)` per year
    pub male_fertility_decline_rate: f32,

    // === HEALTH ===
    /// Health lost every year from ageing alone
    pub base_health_decay: f32,

    /// Stress above this costs extra health each year
    pub high_stress_threshold: f32,

    /// Extra yearly health loss while stress is high
    pub high_stress_health_penalty: f32,

    /// Work-life balance below this costs extra health each year
    pub poor_balance_threshold: f32,

    /// Extra yearly health loss while balance is poor
    pub poor_balance_health_penalty: f32,

    /// Yearly health offset for characters who value health
    pub health_value_bonus: f32,

    // === STRESS ===
    /// Work-life balance below this makes stress creep upward
    pub stress_drift_threshold: f32,

    /// Stress gained per year while under the drift threshold
    pub stress_drift: f32,

    // === HIDDEN ATTRIBUTES ===
    /// Half-width of the uniform jitter on fertility potential
    pub fertility_potential_jitter: f32,

    /// Half-width of the uniform jitter on mental health predisposition
    pub mental_health_jitter: f32,

    // === ECONOMY ===
    /// Independent yearly probability of an economic event
    pub economic_event_chance: f64,

    /// Salary that maps to the neutral finances modifier
    pub baseline_salary: f32,

    // === ACHIEVEMENTS ===
    /// Finances strictly above this unlock the wealth achievement
    pub wealthy_threshold: f32,

    // === GAME CLOCK ===
    /// Real time between ticks at speed 1, in milliseconds
    ///
    /// The effective interval is `base_tick_ms / speed`.
    pub base_tick_ms: u64,

    /// Slowest selectable game speed
    pub min_speed: u32,

    /// Fastest selectable game speed
    pub max_speed: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            starting_age: 18,
            game_over_age: 80,

            female_fertility_decline_age: 35,
            female_fertility_decline_base: 1.05,
            male_fertility_decline_age: 45,
            male_fertility_decline_rate: 0.5,

            base_health_decay: 0.5,
            high_stress_threshold: 70.0,
            high_stress_health_penalty: 0.5,
            poor_balance_threshold: 40.0,
            poor_balance_health_penalty: 0.3,
            health_value_bonus: 0.3,

            stress_drift_threshold: 50.0,
            stress_drift: 1.0,

            fertility_potential_jitter: 10.0,
            mental_health_jitter: 15.0,

            economic_event_chance: 0.05,
            baseline_salary: 50_000.0,

            wealthy_threshold: 80.0,

            base_tick_ms: 3000,
            min_speed: 1,
            max_speed: 5,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.game_over_age <= self.starting_age {
            return Err(LifeSimError::Config(format!(
                "game_over_age ({}) must be greater than starting_age ({})",
                self.game_over_age, self.starting_age
            )));
        }

        if self.min_speed == 0 || self.min_speed > self.max_speed {
            return Err(LifeSimError::Config(format!(
                "speed range {}..={} is invalid",
                self.min_speed, self.max_speed
            )));
        }

        if !(0.0..=1.0).contains(&self.economic_event_chance) {
            return Err(LifeSimError::Config(format!(
                "economic_event_chance ({}) must be within [0, 1]",
                self.economic_event_chance
            )));
        }

        if self.base_tick_ms == 0 {
            return Err(LifeSimError::Config("base_tick_ms must be positive".into()));
        }

        if self.baseline_salary <= 0.0 {
            return Err(LifeSimError::Config("baseline_salary must be positive".into()));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> std::result::Result<(), SimulationConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str("game_over_age = 90\nmax_speed = 10\n").unwrap();
        assert_eq!(config.game_over_age, 90);
        assert_eq!(config.max_speed, 10);
        assert_eq!(config.starting_age, 18);
        assert_eq!(config.base_tick_ms, 3000);
    }

    #[test]
    fn test_rejects_inverted_ages() {
        let result = SimulationConfig::from_toml_str("starting_age = 50\ngame_over_age = 40\n");
        assert!(matches!(result, Err(LifeSimError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = SimulationConfig {
            economic_event_chance: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = SimulationConfig::from_toml_str("game_over_age = \"old\"");
        assert!(matches!(result, Err(LifeSimError::TomlError(_))));
    }
}
