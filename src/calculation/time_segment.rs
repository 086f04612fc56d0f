//! Time segment duration calculation.
//!
//! Converts a start/end clock-time pair into a decimal-hour duration for
//! daily-log contexts. Both values are naive wall-clock times on the same
//! calendar day; no timezone handling applies.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Calculates the decimal-hour duration between two `HH:MM` clock times.
///
/// This is deliberately permissive: an empty or unparseable value, or an
/// end time strictly before the start time, yields zero hours rather than
/// an error.
///
/// # Arguments
///
/// * `start` - The start time in 24-hour `HH:MM` format
/// * `end` - The end time in 24-hour `HH:MM` format
///
/// # Returns
///
/// The non-negative duration in hours as a [`Decimal`], or zero when the
/// pair cannot be interpreted.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::segment_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(segment_hours("08:00", "12:00"), Decimal::from(4));
/// assert_eq!(segment_hours("09:00", "09:30"), Decimal::new(5, 1)); // 0.5
/// assert_eq!(segment_hours("", "12:00"), Decimal::ZERO);
/// assert_eq!(segment_hours("14:00", "12:00"), Decimal::ZERO);
/// ```
pub fn segment_hours(start: &str, end: &str) -> Decimal {
    let (Some(start_minutes), Some(end_minutes)) = (parse_minutes(start), parse_minutes(end))
    else {
        return Decimal::ZERO;
    };

    if end_minutes < start_minutes {
        return Decimal::ZERO;
    }

    Decimal::from(end_minutes - start_minutes) / Decimal::from(60)
}

/// Parses an `HH:MM` string into minutes since midnight.
fn parse_minutes(value: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// TS-001: whole-hour morning segment
    #[test]
    fn test_whole_hour_segment() {
        assert_eq!(segment_hours("08:00", "12:00"), dec("4"));
    }

    /// TS-002: half-hour segment
    #[test]
    fn test_half_hour_segment() {
        assert_eq!(segment_hours("09:00", "09:30"), dec("0.5"));
    }

    /// TS-003: empty start yields zero
    #[test]
    fn test_empty_start_yields_zero() {
        assert_eq!(segment_hours("", "12:00"), Decimal::ZERO);
    }

    /// TS-004: empty end yields zero
    #[test]
    fn test_empty_end_yields_zero() {
        assert_eq!(segment_hours("08:00", ""), Decimal::ZERO);
    }

    /// TS-005: end before start yields zero, not an error
    #[test]
    fn test_end_before_start_yields_zero() {
        assert_eq!(segment_hours("14:00", "12:00"), Decimal::ZERO);
    }

    /// TS-006: identical start and end yields zero
    #[test]
    fn test_zero_length_segment() {
        assert_eq!(segment_hours("10:00", "10:00"), Decimal::ZERO);
    }

    #[test]
    fn test_unparseable_input_yields_zero() {
        assert_eq!(segment_hours("not a time", "12:00"), Decimal::ZERO);
        assert_eq!(segment_hours("08:00", "25:99"), Decimal::ZERO);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert_eq!(segment_hours(" 08:00 ", "12:00"), dec("4"));
    }

    #[test]
    fn test_non_terminating_fraction_is_not_rounded() {
        // 20 minutes = 1/3 hour; the raw quotient is carried, not rounded
        let expected = Decimal::from(20) / Decimal::from(60);
        assert_eq!(segment_hours("09:00", "09:20"), expected);
    }

    #[test]
    fn test_full_day_span() {
        assert_eq!(segment_hours("00:00", "23:59"), Decimal::from(1439) / Decimal::from(60));
    }
}
