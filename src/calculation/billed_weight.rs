//! Billed weight rounding functionality.
//!
//! Landing and parking charges are levied on the MTOW rounded to the
//! nearest metric tonne. All downstream fee math uses the rounded integer
//! weight, never the raw kilogram figure.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an MTOW in kilograms to the nearest metric tonne.
///
/// Ties are rounded half-up (away from zero), so 1500 kg bills as 2 tonnes.
/// The result is monotonic non-decreasing in the raw weight.
///
/// # Arguments
///
/// * `mtow_kg` - The maximum takeoff weight in kilograms
///
/// # Returns
///
/// The billed weight in whole metric tonnes.
///
/// # Examples
///
/// ```
/// use tariff_engine::calculation::billed_weight;
/// use rust_decimal::Decimal;
///
/// assert_eq!(billed_weight(Decimal::new(999, 0)), 1);
/// assert_eq!(billed_weight(Decimal::new(1499, 0)), 1);
/// assert_eq!(billed_weight(Decimal::new(1500, 0)), 2);
/// assert_eq!(billed_weight(Decimal::new(50000, 0)), 50);
/// ```
pub fn billed_weight(mtow_kg: Decimal) -> u32 {
    let tonnes = mtow_kg / Decimal::new(1000, 0);
    let rounded = tonnes.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // A weight beyond u32::MAX tonnes is not physically meaningful; saturate
    // rather than panic.
    rounded.to_u32().unwrap_or(u32::MAX)
}
