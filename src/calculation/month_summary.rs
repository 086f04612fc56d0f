//! Monthly summary calculation.
//!
//! Iterates the days of a target month and aggregates workable days,
//! counted holidays, and the hours consumed by relevant vacation records.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::models::{Holiday, MonthSummary, VacationRecord, WeeklyContract};

use super::day_classification::classify_day;
use super::rounding::{STANDARD_FULL_DAY_HOURS, round1};

/// Builds the list of calendar days for a year/month pair.
///
/// Returns an empty list for an invalid month, matching the engine's
/// degrade-to-zero policy.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::month_days;
///
/// assert_eq!(month_days(2025, 6).len(), 30);
/// assert_eq!(month_days(2024, 2).len(), 29); // leap year
/// assert!(month_days(2025, 13).is_empty());
/// ```
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|day| day.year() == year && day.month() == month)
        .collect()
}

/// Calculates the aggregate monthly figures for a user.
///
/// For each day of the month:
/// - a workable day increments `workable_days`;
/// - a workable day whose date matches a holiday increments
///   `holidays_counted`;
/// - a relevant vacation record on a non-holiday day adds the day's
///   contracted hours to `vacation_impact_hours`. A vacation falling on a
///   counted holiday consumes nothing (holiday takes precedence), and one
///   falling on a contract-zero weekday contributes zero hours while still
///   counting toward `calendar_vacation_days`.
///
/// Rejected records are excluded throughout. The calculation never errors;
/// missing or malformed per-day data degrades to zero contributions, and
/// identical inputs always produce identical output.
///
/// # Arguments
///
/// * `days` - The calendar days of the target month, typically from
///   [`month_days`]
/// * `contract` - The user's weekly contract schedule
/// * `holidays` - The holiday list
/// * `records` - The month's vacation records (any status; filtering
///   happens here)
pub fn calculate_month_summary(
    days: &[NaiveDate],
    contract: &WeeklyContract,
    holidays: &[Holiday],
    records: &[VacationRecord],
) -> MonthSummary {
    let mut workable_days: u32 = 0;
    let mut holidays_counted: u32 = 0;
    let mut vacation_impact_hours = Decimal::ZERO;

    for &day in days {
        let assessment = classify_day(day, contract, holidays);

        if assessment.workable {
            workable_days += 1;
        }
        if assessment.holiday_counted {
            holidays_counted += 1;
        }

        let on_vacation = records
            .iter()
            .any(|r| r.status.is_relevant() && r.date == day);
        if on_vacation && !assessment.holiday_counted {
            vacation_impact_hours += assessment.contracted_hours;
        }
    }

    // Raw calendar count of distinct relevant vacation dates in the month,
    // independent of workability and holidays.
    let month_dates: BTreeSet<NaiveDate> = days.iter().copied().collect();
    let calendar_vacation_days = records
        .iter()
        .filter(|r| r.status.is_relevant() && month_dates.contains(&r.date))
        .map(|r| r.date)
        .collect::<BTreeSet<_>>()
        .len() as u32;

    let vacation_days_calculated = round1(vacation_impact_hours / STANDARD_FULL_DAY_HOURS);
    let effective_worked_days = round1(
        Decimal::from(workable_days) - Decimal::from(holidays_counted) - vacation_days_calculated,
    );

    MonthSummary {
        workable_days,
        holidays_counted,
        calendar_vacation_days,
        vacation_impact_hours,
        vacation_days_calculated,
        effective_worked_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayHours, VacationStatus};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn full_time_contract() -> WeeklyContract {
        let working = DayHours {
            morning: dec("4.0"),
            afternoon: dec("4.0"),
        };
        WeeklyContract {
            monday: working,
            tuesday: working,
            wednesday: working,
            thursday: working,
            friday: working,
            ..WeeklyContract::default()
        }
    }

    fn holiday(date_str: &str) -> Holiday {
        Holiday {
            date: make_date(date_str),
            name: "Test Holiday".to_string(),
            is_official: true,
        }
    }

    fn record(date_str: &str, status: VacationStatus) -> VacationRecord {
        VacationRecord {
            user_id: "user_001".to_string(),
            date: make_date(date_str),
            status,
        }
    }

    #[test]
    fn test_month_days_lengths() {
        assert_eq!(month_days(2025, 1).len(), 31);
        assert_eq!(month_days(2025, 6).len(), 30);
        assert_eq!(month_days(2025, 2).len(), 28);
        assert_eq!(month_days(2024, 2).len(), 29);
    }

    #[test]
    fn test_month_days_invalid_month_is_empty() {
        assert!(month_days(2025, 0).is_empty());
        assert!(month_days(2025, 13).is_empty());
    }

    /// MS-001: baseline month with no holidays or vacations
    #[test]
    fn test_plain_month_counts_weekdays() {
        // June 2025: starts on a Sunday, 30 days, 21 weekdays
        let days = month_days(2025, 6);
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &[]);

        assert_eq!(summary.workable_days, 21);
        assert_eq!(summary.holidays_counted, 0);
        assert_eq!(summary.calendar_vacation_days, 0);
        assert_eq!(summary.vacation_impact_hours, Decimal::ZERO);
        assert_eq!(summary.vacation_days_calculated, Decimal::ZERO);
        assert_eq!(summary.effective_worked_days, dec("21"));
    }

    /// MS-002: one approved vacation on a Wednesday consumes a full day
    #[test]
    fn test_approved_vacation_on_workday() {
        let days = month_days(2025, 6);
        // 2025-06-11 is a Wednesday
        let records = vec![record("2025-06-11", VacationStatus::Approved)];
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &records);

        assert_eq!(summary.vacation_impact_hours, dec("8.0"));
        assert_eq!(summary.vacation_days_calculated, dec("1.0"));
        assert_eq!(summary.calendar_vacation_days, 1);
        assert_eq!(summary.effective_worked_days, dec("20.0"));
    }

    /// MS-003: a rejected record contributes nothing anywhere
    #[test]
    fn test_rejected_vacation_is_excluded() {
        let days = month_days(2025, 6);
        // 2025-06-09 is a Monday
        let records = vec![record("2025-06-09", VacationStatus::Rejected)];
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &records);

        assert_eq!(summary.vacation_impact_hours, Decimal::ZERO);
        assert_eq!(summary.calendar_vacation_days, 0);
        assert_eq!(summary.effective_worked_days, dec("21"));
    }

    /// MS-004: a vacation coinciding with a holiday consumes nothing
    #[test]
    fn test_vacation_on_holiday_consumes_nothing() {
        let days = month_days(2025, 6);
        // 2025-06-09 is a Monday and a holiday
        let holidays = vec![holiday("2025-06-09")];
        let records = vec![record("2025-06-09", VacationStatus::Approved)];
        let summary = calculate_month_summary(&days, &full_time_contract(), &holidays, &records);

        assert_eq!(summary.vacation_impact_hours, Decimal::ZERO);
        assert_eq!(summary.holidays_counted, 1);
        // The calendar day still counts as a marked vacation day
        assert_eq!(summary.calendar_vacation_days, 1);
        assert_eq!(summary.effective_worked_days, dec("20"));
    }

    /// MS-005: a vacation on a contract-zero weekday contributes zero hours
    /// but still counts as a calendar vacation day
    #[test]
    fn test_vacation_on_contract_zero_day() {
        let days = month_days(2025, 6);
        // 2025-06-14 is a Saturday
        let records = vec![record("2025-06-14", VacationStatus::Approved)];
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &records);

        assert_eq!(summary.vacation_impact_hours, Decimal::ZERO);
        assert_eq!(summary.vacation_days_calculated, Decimal::ZERO);
        assert_eq!(summary.calendar_vacation_days, 1);
    }

    /// MS-006: pending and selected records consume hours like approved ones
    #[test]
    fn test_pending_and_selected_records_consume_hours() {
        let days = month_days(2025, 6);
        let records = vec![
            record("2025-06-10", VacationStatus::PendingApproval),
            record("2025-06-12", VacationStatus::Selected),
        ];
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &records);

        assert_eq!(summary.vacation_impact_hours, dec("16.0"));
        assert_eq!(summary.vacation_days_calculated, dec("2.0"));
        assert_eq!(summary.calendar_vacation_days, 2);
    }

    /// MS-007: a half-day contract yields a fractional day equivalent
    #[test]
    fn test_half_day_contract_rounds_to_one_decimal() {
        let mut contract = full_time_contract();
        contract.wednesday = DayHours {
            morning: dec("3.0"),
            afternoon: Decimal::ZERO,
        };
        let days = month_days(2025, 6);
        let records = vec![record("2025-06-11", VacationStatus::Approved)];
        let summary = calculate_month_summary(&days, &contract, &[], &records);

        // 3 / 8 = 0.375, rounded half away from zero to 0.4
        assert_eq!(summary.vacation_impact_hours, dec("3.0"));
        assert_eq!(summary.vacation_days_calculated, dec("0.4"));
    }

    /// MS-008: records outside the month are ignored
    #[test]
    fn test_records_outside_month_are_ignored() {
        let days = month_days(2025, 6);
        let records = vec![
            record("2025-05-30", VacationStatus::Approved),
            record("2025-07-01", VacationStatus::Approved),
        ];
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &records);

        assert_eq!(summary.vacation_impact_hours, Decimal::ZERO);
        assert_eq!(summary.calendar_vacation_days, 0);
    }

    /// MS-009: duplicate records on the same date count as one calendar day
    /// and consume the day's hours once
    #[test]
    fn test_duplicate_records_on_same_date() {
        let days = month_days(2025, 6);
        let records = vec![
            record("2025-06-11", VacationStatus::Approved),
            record("2025-06-11", VacationStatus::Selected),
        ];
        let summary = calculate_month_summary(&days, &full_time_contract(), &[], &records);

        assert_eq!(summary.vacation_impact_hours, dec("8.0"));
        assert_eq!(summary.calendar_vacation_days, 1);
    }

    /// MS-010: identical inputs produce identical output
    #[test]
    fn test_idempotence() {
        let days = month_days(2025, 6);
        let holidays = vec![holiday("2025-06-09")];
        let records = vec![
            record("2025-06-10", VacationStatus::Approved),
            record("2025-06-14", VacationStatus::PendingApproval),
        ];

        let first = calculate_month_summary(&days, &full_time_contract(), &holidays, &records);
        let second = calculate_month_summary(&days, &full_time_contract(), &holidays, &records);
        assert_eq!(first, second);
    }

    /// MS-011: effective worked days may go negative and is not clamped
    #[test]
    fn test_effective_worked_days_not_clamped() {
        // Contract works Monday only; every Monday in June 2025 is a holiday,
        // and vacation covers contract-zero days to inflate nothing. Instead
        // force negativity with vacation hours exceeding the workable days.
        let mut contract = WeeklyContract::default();
        contract.monday = DayHours {
            morning: dec("6.0"),
            afternoon: dec("6.0"),
        };
        let days = month_days(2025, 6);
        // Mondays in June 2025: 2, 9, 16, 23, 30 -> 5 workable days
        // Vacation on every Monday: 5 * 12h = 60h -> 7.5 day equivalents
        let records: Vec<VacationRecord> = ["2025-06-02", "2025-06-09", "2025-06-16", "2025-06-23", "2025-06-30"]
            .iter()
            .map(|d| record(d, VacationStatus::Approved))
            .collect();
        let summary = calculate_month_summary(&days, &contract, &[], &records);

        assert_eq!(summary.workable_days, 5);
        assert_eq!(summary.vacation_days_calculated, dec("7.5"));
        assert_eq!(summary.effective_worked_days, dec("-2.5"));
    }

    /// MS-012: empty day list degrades to an all-zero summary
    #[test]
    fn test_empty_day_list_yields_zero_summary() {
        let summary = calculate_month_summary(&[], &full_time_contract(), &[], &[]);
        assert_eq!(summary.workable_days, 0);
        assert_eq!(summary.effective_worked_days, Decimal::ZERO);
    }
}
