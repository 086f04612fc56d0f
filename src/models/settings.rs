//! User-level entitlement settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Global entitlement settings for a single user.
///
/// The annual entitlement is the base full-time figure; the work rate
/// prorates it for part-time contracts (for example 50 for a half-time
/// employee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Base annual vacation-day entitlement at full time, strictly positive.
    pub annual_vacation_days: Decimal,
    /// Part-time work rate as a percentage, within `(0, 100]`.
    pub work_rate_percent: Decimal,
}

impl UserSettings {
    /// Validates the entitlement and work-rate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] when the annual entitlement
    /// is not strictly positive or the work rate falls outside `(0, 100]`.
    /// Validation happens at ingestion, before the settings reach the
    /// annual balance calculator.
    pub fn validate(&self) -> EngineResult<()> {
        if self.annual_vacation_days <= Decimal::ZERO {
            return Err(EngineError::InvalidSettings {
                field: "annual_vacation_days".to_string(),
                message: format!("must be strictly positive, got {}", self.annual_vacation_days),
            });
        }
        if self.work_rate_percent <= Decimal::ZERO || self.work_rate_percent > ONE_HUNDRED {
            return Err(EngineError::InvalidSettings {
                field: "work_rate_percent".to_string(),
                message: format!("must be within (0, 100], got {}", self.work_rate_percent),
            });
        }
        Ok(())
    }
}
