//! Calculation logic for the Leave Engine.
//!
//! This module contains the balance and reconciliation calculators: time
//! segment duration, per-day classification against contract and holidays,
//! monthly work-hour summaries, and the annual vacation balance, together
//! with the shared rounding policy.

mod annual_balance;
mod day_classification;
mod month_summary;
mod rounding;
mod time_segment;

pub use annual_balance::calculate_annual_balance;
pub use day_classification::{DayAssessment, classify_day};
pub use month_summary::{calculate_month_summary, month_days};
pub use rounding::{STANDARD_FULL_DAY_HOURS, round1};
pub use time_segment::segment_hours;
