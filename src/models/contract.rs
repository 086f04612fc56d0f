//! Weekly contract model.
//!
//! This module defines the per-weekday contracted hours that determine
//! which days are workable and how many hours a vacation day consumes.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The maximum contracted hours allowed for a single half-day.
const MAX_HALF_DAY_HOURS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Contracted hours for one weekday, split into morning and afternoon.
///
/// # Example
///
/// ```
/// use leave_engine::models::DayHours;
/// use rust_decimal::Decimal;
///
/// let day = DayHours {
///     morning: Decimal::new(40, 1),   // 4.0
///     afternoon: Decimal::new(40, 1), // 4.0
/// };
/// assert_eq!(day.total(), Decimal::new(80, 1)); // 8.0
/// assert!(day.is_workable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayHours {
    /// Contracted morning hours, within `[0, 12]`.
    #[serde(default)]
    pub morning: Decimal,
    /// Contracted afternoon hours, within `[0, 12]`.
    #[serde(default)]
    pub afternoon: Decimal,
}

impl DayHours {
    /// Returns the total contracted hours for the day.
    pub fn total(&self) -> Decimal {
        self.morning + self.afternoon
    }

    /// Returns true when at least one half-day carries contracted hours.
    ///
    /// A day with zero morning and zero afternoon hours is a contractual
    /// day off and is never counted as workable, regardless of holidays
    /// or vacation records falling on it.
    pub fn is_workable(&self) -> bool {
        self.morning > Decimal::ZERO || self.afternoon > Decimal::ZERO
    }

    fn validate(&self, day: &str) -> EngineResult<()> {
        for (half, value) in [("morning", self.morning), ("afternoon", self.afternoon)] {
            if value < Decimal::ZERO || value > MAX_HALF_DAY_HOURS {
                return Err(EngineError::InvalidContract {
                    day: day.to_string(),
                    message: format!("{} hours must be within [0, 12], got {}", half, value),
                });
            }
        }
        Ok(())
    }
}

/// The weekly contract schedule: contracted hours for each of the 7 weekdays.
///
/// Weekdays absent from a configuration file default to zero hours, so a
/// part-time contract only needs to list its working days.
///
/// # Example
///
/// ```
/// use leave_engine::models::{DayHours, WeeklyContract};
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let contract = WeeklyContract {
///     monday: DayHours { morning: Decimal::from(4), afternoon: Decimal::from(4) },
///     ..WeeklyContract::default()
/// };
/// assert!(contract.hours_for(Weekday::Mon).is_workable());
/// assert!(!contract.hours_for(Weekday::Sat).is_workable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyContract {
    /// Contracted hours for Monday.
    #[serde(default)]
    pub monday: DayHours,
    /// Contracted hours for Tuesday.
    #[serde(default)]
    pub tuesday: DayHours,
    /// Contracted hours for Wednesday.
    #[serde(default)]
    pub wednesday: DayHours,
    /// Contracted hours for Thursday.
    #[serde(default)]
    pub thursday: DayHours,
    /// Contracted hours for Friday.
    #[serde(default)]
    pub friday: DayHours,
    /// Contracted hours for Saturday.
    #[serde(default)]
    pub saturday: DayHours,
    /// Contracted hours for Sunday.
    #[serde(default)]
    pub sunday: DayHours,
}

impl WeeklyContract {
    /// Returns the contracted hours for the given weekday.
    pub fn hours_for(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Validates that every half-day value is within `[0, 12]`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidContract`] naming the first offending
    /// weekday. Validation happens at ingestion; the calculators document
    /// raw numeric behavior and do not re-check.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, hours) in self.days() {
            hours.validate(name)?;
        }
        Ok(())
    }

    fn days(&self) -> [(&'static str, &DayHours); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }
}
