//! Configuration types for the Leave Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Holiday, UserSettings, WeeklyContract};

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The flat holiday list.
    pub holidays: Vec<Holiday>,
}

/// The complete engine configuration loaded from YAML files.
///
/// Aggregates the weekly contract, the holiday calendar, and the user
/// entitlement settings. All values are validated at ingestion; the
/// calculators receive them as-is.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    contract: WeeklyContract,
    holidays: Vec<Holiday>,
    settings: UserSettings,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(contract: WeeklyContract, holidays: Vec<Holiday>, settings: UserSettings) -> Self {
        Self {
            contract,
            holidays,
            settings,
        }
    }

    /// Returns the weekly contract schedule.
    pub fn contract(&self) -> &WeeklyContract {
        &self.contract
    }

    /// Returns the holiday list.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the user entitlement settings.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }
}
