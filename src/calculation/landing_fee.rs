//! Landing fee calculation functionality.
//!
//! Domestic landings bill a flat per-tonne rate with a published minimum.
//! International landings bill from a weight-slab table: the first slab
//! whose ceiling covers the billed weight supplies the per-tonne rate.

use rust_decimal::Decimal;

use crate::config::{LandingRule, WeightSlab};
use crate::models::LegType;

/// Calculates the landing fee for one stop.
///
/// - Domestic: `max(billed_weight * domestic_per_mt, domestic_min)`.
/// - International: `billed_weight * slab_rate`, where the slab rate comes
///   from the first slab (in ascending ceiling order) that covers the
///   weight. An airport with no slabs configured bills zero; this is a
///   silent degenerate case, not an error.
///
/// # Arguments
///
/// * `leg_type` - Whether the movement is domestic or international
/// * `billed_weight_mt` - The billed weight in metric tonnes
/// * `rule` - The airport's landing rule
///
/// # Examples
///
/// ```
/// use tariff_engine::calculation::calculate_landing_fee;
/// use tariff_engine::config::{LandingRule, WeightSlab};
/// use tariff_engine::models::LegType;
/// use rust_decimal::Decimal;
///
/// let rule = LandingRule {
///     domestic_per_mt: Decimal::new(441, 0),
///     domestic_min: Decimal::new(5788, 0),
///     intl_slabs: vec![],
/// };
///
/// // 50 MT * 441 = 22050, above the 5788 minimum
/// let fee = calculate_landing_fee(LegType::Domestic, 50, &rule);
/// assert_eq!(fee, Decimal::new(22050, 0));
/// ```
pub fn calculate_landing_fee(leg_type: LegType, billed_weight_mt: u32, rule: &LandingRule) -> Decimal {
    let weight = Decimal::from(billed_weight_mt);

    match leg_type {
        LegType::Domestic => {
            let raw = weight * rule.domestic_per_mt;
            raw.max(rule.domestic_min)
        }
        LegType::International => weight * intl_slab_rate(&rule.intl_slabs, billed_weight_mt),
    }
}

/// Returns the per-tonne rate of the first slab covering the billed weight.
///
/// Slabs are stored in ascending ceiling order with an unbounded terminal
/// slab, so the scan stops at the first slab whose ceiling is `None` or at
/// least the weight. An empty slab list yields a zero rate.
pub fn intl_slab_rate(slabs: &[WeightSlab], billed_weight_mt: u32) -> Decimal {
    for slab in slabs {
        match slab.max_mt {
            None => return slab.per_mt,
            Some(max_mt) if billed_weight_mt <= max_mt => return slab.per_mt,
            Some(_) => {}
        }
    }
    Decimal::ZERO
}
