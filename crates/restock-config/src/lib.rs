//! Configuration system for restock.
//!
//! Load planning configuration from TOML or YAML files to control the
//! pallet conversion, variable bounds and formulation mode without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use restock_config::{PlanConfig, SolveMode};
//!
//! let config = PlanConfig::from_toml_str(r#"
//!     units_per_pallet = 12
//!     pallet_cap = 500
//!     mode = "continuous_relaxation"
//! "#).unwrap();
//!
//! assert_eq!(config.units_per_pallet, 12);
//! assert_eq!(config.pallet_cap, 500);
//! assert_eq!(config.mode, SolveMode::ContinuousRelaxation);
//! ```
//!
//! Use the default config when no file is given:
//!
//! ```
//! use restock_config::PlanConfig;
//!
//! let config = PlanConfig::load("plan.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which formulation the model builder produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    /// Whole-pallet ordering: bounded integer variables.
    #[default]
    Integer,
    /// Fast feasibility/cost estimation: continuous variables on `[0, inf)`.
    ContinuousRelaxation,
}

/// Main planning configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlanConfig {
    /// Physical units per pallet. The single source of truth for the
    /// pallets-to-units conversion used by every constraint family.
    #[serde(default = "default_units_per_pallet")]
    pub units_per_pallet: i64,

    /// Upper bound on each order variable in the integer formulation.
    #[serde(default = "default_pallet_cap")]
    pub pallet_cap: u32,

    /// Integer formulation or continuous relaxation.
    #[serde(default)]
    pub mode: SolveMode,

    /// Name of the solver engine to submit the model to.
    #[serde(default = "default_engine")]
    pub engine: String,
}

fn default_units_per_pallet() -> i64 {
    24
}

fn default_pallet_cap() -> u32 {
    1000
}

fn default_engine() -> String {
    "microlp".to_string()
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            units_per_pallet: default_units_per_pallet(),
            pallet_cap: default_pallet_cap(),
            mode: SolveMode::default(),
            engine: default_engine(),
        }
    }
}

impl PlanConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the units-per-pallet conversion.
    pub fn with_units_per_pallet(mut self, units: i64) -> Self {
        self.units_per_pallet = units;
        self
    }

    /// Sets the order variable upper bound.
    pub fn with_pallet_cap(mut self, cap: u32) -> Self {
        self.pallet_cap = cap;
        self
    }

    /// Sets the formulation mode.
    pub fn with_mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the solver engine name.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Checks that all fields hold usable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a non-positive units-per-pallet
    /// or pallet cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.units_per_pallet <= 0 {
            return Err(ConfigError::Invalid(format!(
                "units_per_pallet must be positive, got {}",
                self.units_per_pallet
            )));
        }
        if self.pallet_cap == 0 {
            return Err(ConfigError::Invalid(
                "pallet_cap must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
