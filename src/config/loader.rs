//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, UserSettings, WeeklyContract};

use super::types::{EngineConfig, HolidaysConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and exposes the contract, holidays, and settings.
/// Range checks (contract hours within `[0, 12]`, work rate within
/// `(0, 100]`) happen here, at ingestion, so the calculators can document
/// raw numeric behavior.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── contract.yaml   # weekly contract schedule
/// ├── holidays.yaml   # holiday calendar
/// └── settings.yaml   # entitlement settings
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Annual days: {}", loader.settings().annual_vacation_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The contract or settings fail their range validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let contract_path = path.join("contract.yaml");
        let contract = Self::load_yaml::<WeeklyContract>(&contract_path)?;
        contract.validate()?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_config = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;

        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<UserSettings>(&settings_path)?;
        settings.validate()?;

        let config = EngineConfig::new(contract, holidays_config.holidays, settings);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the weekly contract schedule.
    pub fn contract(&self) -> &WeeklyContract {
        self.config.contract()
    }

    /// Returns the holiday list.
    pub fn holidays(&self) -> &[Holiday] {
        self.config.holidays()
    }

    /// Returns the user entitlement settings.
    pub fn settings(&self) -> &UserSettings {
        self.config.settings()
    }
}
