//! Rounding policy and day-length constant.
//!
//! All rounding in the engine uses a single fixed policy: round half away
//! from zero to exactly one decimal place, applied only at the pipeline
//! stages named by the calculators. Intermediate sums are never rounded;
//! rounding them would diverge on fractional-hour edge cases.

use rust_decimal::{Decimal, RoundingStrategy};

/// One full nominal workday in hours.
///
/// Used to convert consumed vacation hours into day equivalents.
pub const STANDARD_FULL_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Rounds a value to one decimal place, half away from zero.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::round1;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round1(Decimal::new(25, 2)), Decimal::new(3, 1));   // 0.25 -> 0.3
/// assert_eq!(round1(Decimal::new(-25, 2)), Decimal::new(-3, 1)); // -0.25 -> -0.3
/// ```
pub fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
