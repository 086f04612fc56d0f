//! Calendar day classification.
//!
//! Classifies a single calendar day against a weekly contract and a holiday
//! list: whether the day is workable, whether a holiday counts on it, and
//! how many contracted hours it carries.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, WeeklyContract};

/// The classification of a single calendar day.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::classify_day;
/// use leave_engine::models::{DayHours, WeeklyContract};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = WeeklyContract {
///     monday: DayHours { morning: Decimal::from(4), afternoon: Decimal::from(4) },
///     ..WeeklyContract::default()
/// };
///
/// // 2025-06-09 is a Monday
/// let day = classify_day(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(), &contract, &[]);
/// assert!(day.workable);
/// assert!(!day.holiday_counted);
/// assert_eq!(day.contracted_hours, Decimal::from(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssessment {
    /// True when the weekday carries contracted hours.
    pub workable: bool,
    /// True when the day is workable and a holiday falls on its date.
    /// Holidays on contract-zero weekdays are never counted.
    pub holiday_counted: bool,
    /// Total contracted hours for the weekday (morning + afternoon), zero
    /// on contract-zero weekdays.
    pub contracted_hours: Decimal,
}

/// Classifies a calendar day against a contract and holiday list.
///
/// A day is workable iff its weekday has non-zero morning or afternoon
/// contracted hours; contract-zero weekdays are never workable, regardless
/// of holidays or vacation records falling on them. A holiday is counted
/// only when its date exactly matches a workable day.
///
/// # Arguments
///
/// * `date` - The calendar day to classify
/// * `contract` - The user's weekly contract schedule
/// * `holidays` - The holiday list; first match by date wins
pub fn classify_day(
    date: NaiveDate,
    contract: &WeeklyContract,
    holidays: &[Holiday],
) -> DayAssessment {
    let hours = contract.hours_for(date.weekday());
    let workable = hours.is_workable();
    let holiday_counted = workable && holidays.iter().any(|h| h.falls_on(date));

    DayAssessment {
        workable,
        holiday_counted,
        contracted_hours: hours.total(),
    }
}
