//! Parking fee calculation functionality.
//!
//! Parking bills per tonne per hour after a free-time allowance. The free
//! window is the configured free hours plus a grace buffer in minutes. The
//! domestic rate applies regardless of leg type; this is an intentional
//! simplification carried from the published rule set.

use rust_decimal::Decimal;

use crate::config::ParkingRule;

/// Returns the billable parking hours after the free-time allowance.
///
/// `effective_free = free_hours + buffer_minutes / 60`; anything up to the
/// effective free window bills zero hours.
///
/// # Examples
///
/// ```
/// use tariff_engine::calculation::billable_parking_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 3h parked, 2h free + 15min buffer => 0.75h billable
/// let billable = billable_parking_hours(
///     Decimal::new(3, 0),
///     Decimal::new(2, 0),
///     15,
/// );
/// assert_eq!(billable, Decimal::from_str("0.75").unwrap());
/// ```
pub fn billable_parking_hours(
    raw_hours: Decimal,
    free_hours: Decimal,
    buffer_minutes: u32,
) -> Decimal {
    let effective_free = free_hours + Decimal::from(buffer_minutes) / Decimal::new(60, 0);
    (raw_hours - effective_free).max(Decimal::ZERO)
}

/// Calculates the parking fee for one stop.
///
/// `fee = billed_weight * domestic_per_mt_per_hr * billable_hours`.
///
/// # Arguments
///
/// * `billed_weight_mt` - The billed weight in metric tonnes
/// * `raw_hours` - The gate/stand time to bill, before the free allowance
/// * `rule` - The airport's parking rule
pub fn calculate_parking_fee(billed_weight_mt: u32, raw_hours: Decimal, rule: &ParkingRule) -> Decimal {
    let billable = billable_parking_hours(raw_hours, rule.free_hours, rule.free_buffer_minutes);
    Decimal::from(billed_weight_mt) * rule.domestic_per_mt_per_hr * billable
}
