//! Core data models for the Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contract;
mod holiday;
mod settings;
mod summary;
mod vacation;

pub use contract::{DayHours, WeeklyContract};
pub use holiday::Holiday;
pub use settings::UserSettings;
pub use summary::{AnnualBalance, MonthSummary};
pub use vacation::{VacationRecord, VacationStatus};
