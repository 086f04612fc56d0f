//! Annual vacation balance calculation.
//!
//! Nets a year's consumed vacation hours against the prorated annual
//! entitlement. The scoping year is an explicit parameter so the
//! calculation stays deterministic and testable; callers pass the current
//! calendar year rather than the engine reading the system clock.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{AnnualBalance, Holiday, UserSettings, VacationRecord, WeeklyContract};

use super::rounding::{STANDARD_FULL_DAY_HOURS, round1};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Calculates the annual entitlement and remaining balance for a user.
///
/// Steps:
/// 1. `effective_annual_allowance` = round1(annual days × work rate / 100).
/// 2. Records are filtered to relevant statuses within the scoping year;
///    rejected records and records from other years are excluded.
/// 3. Each remaining record consumes its weekday's contracted hours, or
///    zero when its date matches a holiday.
/// 4. `days_consumed` = round1(total hours / full-day hours).
/// 5. `balance_delta` = round1(allowance − consumed), signed;
///    `remaining_vacation_days` clamps it at zero. Both are returned so the
///    presentation layer can decide whether to surface a deficit.
///
/// Rounding happens at exactly the stages above; intermediate sums are
/// carried unrounded.
///
/// # Arguments
///
/// * `records` - All of the user's vacation records (any year, any status)
/// * `contract` - The user's weekly contract schedule
/// * `holidays` - The holiday list
/// * `settings` - The user's entitlement settings
/// * `year` - The calendar year to scope consumption to
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_annual_balance;
/// use leave_engine::models::{UserSettings, WeeklyContract};
/// use rust_decimal::Decimal;
///
/// let settings = UserSettings {
///     annual_vacation_days: Decimal::from(20),
///     work_rate_percent: Decimal::from(50),
/// };
/// let balance = calculate_annual_balance(&[], &WeeklyContract::default(), &[], &settings, 2025);
/// assert_eq!(balance.effective_annual_allowance, Decimal::new(100, 1)); // 10.0
/// ```
pub fn calculate_annual_balance(
    records: &[VacationRecord],
    contract: &WeeklyContract,
    holidays: &[Holiday],
    settings: &UserSettings,
    year: i32,
) -> AnnualBalance {
    let effective_annual_allowance =
        round1(settings.annual_vacation_days * settings.work_rate_percent / ONE_HUNDRED);

    let mut consumed_hours = Decimal::ZERO;
    for record in records
        .iter()
        .filter(|r| r.status.is_relevant() && r.date.year() == year)
    {
        if holidays.iter().any(|h| h.falls_on(record.date)) {
            continue;
        }
        consumed_hours += contract.hours_for(record.date.weekday()).total();
    }

    let days_consumed = round1(consumed_hours / STANDARD_FULL_DAY_HOURS);
    let balance_delta = round1(effective_annual_allowance - days_consumed);
    let remaining_vacation_days = balance_delta.max(Decimal::ZERO);

    AnnualBalance {
        effective_annual_allowance,
        days_consumed,
        balance_delta,
        remaining_vacation_days,
    }
}
