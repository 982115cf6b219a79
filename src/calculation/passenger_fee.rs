//! Passenger facility fee (UDF) calculation functionality.
//!
//! Airports that levy a user development fee bill a fixed amount per
//! passenger, split by direction and leg type. Airports without a
//! configured UDF schedule bill zero.

use rust_decimal::Decimal;

use crate::config::PassengerFeeRule;
use crate::models::LegType;

/// Calculates the passenger facility fee for one stop.
///
/// Selects the (departing, arriving) rate pair by leg type and bills
/// `pax_departing * depart_rate + pax_arriving * arrive_rate`. A stop at
/// an airport with no UDF schedule bills zero.
///
/// # Examples
///
/// ```
/// use tariff_engine::calculation::calculate_passenger_fee;
/// use tariff_engine::config::PassengerFeeRule;
/// use tariff_engine::models::LegType;
/// use rust_decimal::Decimal;
///
/// let rule = PassengerFeeRule {
///     domestic_depart: Decimal::new(1050, 0),
///     domestic_arrive: Decimal::new(450, 0),
///     intl_depart: Decimal::new(1540, 0),
///     intl_arrive: Decimal::new(660, 0),
/// };
///
/// // 100 departing * 1050 + 80 arriving * 450 = 141000
/// let fee = calculate_passenger_fee(LegType::Domestic, 100, 80, Some(&rule));
/// assert_eq!(fee, Decimal::new(141000, 0));
/// ```
pub fn calculate_passenger_fee(
    leg_type: LegType,
    pax_departing: u32,
    pax_arriving: u32,
    rule: Option<&PassengerFeeRule>,
) -> Decimal {
    let Some(rule) = rule else {
        return Decimal::ZERO;
    };

    let (depart_rate, arrive_rate) = match leg_type {
        LegType::Domestic => (rule.domestic_depart, rule.domestic_arrive),
        LegType::International => (rule.intl_depart, rule.intl_arrive),
    };

    Decimal::from(pax_departing) * depart_rate + Decimal::from(pax_arriving) * arrive_rate
}
