//! Configuration file support for kcal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/kcal/config.toml`.

use crate::catalog::DEFAULT_REFERENCE_WEIGHT_KG;
use crate::controls::ControlState;
use crate::{Error, ExerciseReference, Individual, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial control values, used where a flag is not given
    #[serde(default)]
    pub controls: ControlState,

    #[serde(default)]
    pub exercises: ExercisesConfig,
}

/// Extra exercise table entries
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ExercisesConfig {
    #[serde(default)]
    pub custom: Vec<CustomExercise>,
}

/// User-defined exercise entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomExercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeremy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kevin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_weight_kg: Option<f64>,
}

impl CustomExercise {
    pub fn to_reference(&self) -> ExerciseReference {
        let mut rate_per_minute = HashMap::new();
        if let Some(rate) = self.jeremy {
            rate_per_minute.insert(Individual::Jeremy, rate);
        }
        if let Some(rate) = self.kevin {
            rate_per_minute.insert(Individual::Kevin, rate);
        }

        ExerciseReference {
            id: self.id.clone(),
            name: self.name.clone(),
            rate_per_minute,
            reference_weight_kg: self.base_weight_kg.unwrap_or(DEFAULT_REFERENCE_WEIGHT_KG),
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// Unlike [`Config::load`], a missing file here is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".config"),
            None => PathBuf::from(".config"),
        });
        base.join("kcal").join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}
