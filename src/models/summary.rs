//! Computed output values.
//!
//! These structs are pure return values, recomputed on every invocation.
//! The engine never caches or persists them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Number of days in the month with contracted hours.
    pub workable_days: u32,
    /// Number of workable days that coincide with a holiday.
    pub holidays_counted: u32,
    /// Raw count of distinct relevant vacation dates within the month,
    /// holiday or not.
    pub calendar_vacation_days: u32,
    /// Contracted hours consumed by vacation days, excluding holidays.
    pub vacation_impact_hours: Decimal,
    /// Vacation impact expressed in full-day equivalents, rounded to one
    /// decimal place.
    pub vacation_days_calculated: Decimal,
    /// Workable days net of holidays and vacation, rounded to one decimal
    /// place. Not clamped: pathological inputs may produce a negative value.
    pub effective_worked_days: Decimal,
}

/// Annual vacation entitlement figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualBalance {
    /// Annual entitlement prorated by the work rate, rounded to one decimal
    /// place.
    pub effective_annual_allowance: Decimal,
    /// Full-day equivalents consumed this year, rounded to one decimal place.
    pub days_consumed: Decimal,
    /// Signed difference between allowance and consumption. Negative when
    /// the user has over-consumed.
    pub balance_delta: Decimal,
    /// Remaining entitlement, clamped at zero.
    pub remaining_vacation_days: Decimal,
}
