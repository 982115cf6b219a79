//! Per-stop pricing functionality.
//!
//! This module ties the individual fee calculators together: it validates a
//! stop, looks up the airport's schedule, and produces the itemized
//! breakdown line. Both the single-route and batch pipelines go through
//! this one function.

use crate::calculation::{
    billed_weight, calculate_landing_fee, calculate_parking_fee, calculate_passenger_fee,
};
use crate::config::TariffStore;
use crate::error::EngineResult;
use crate::models::{BreakdownLine, Stop};

/// Prices one stop against the tariff store.
///
/// Validates the stop's numeric constraints, resolves the airport schedule,
/// and computes the landing, parking, passenger facility, and navigation
/// fees on the billed weight.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidStop`] for out-of-range stop
/// data, or [`crate::error::EngineError::TariffNotFound`] when the airport
/// has no configured schedule.
pub fn price_stop(stop: &Stop, store: &TariffStore) -> EngineResult<BreakdownLine> {
    stop.validate()?;
    let schedule = store.get(&stop.airport)?;

    let weight_mt = billed_weight(stop.mtow_kg);
    let landing_fee = calculate_landing_fee(stop.leg_type, weight_mt, &schedule.landing);
    let parking_fee = calculate_parking_fee(weight_mt, stop.parking_hours, &schedule.parking);
    let passenger_fee = calculate_passenger_fee(
        stop.leg_type,
        stop.pax_departing,
        stop.pax_arriving,
        schedule.udf.as_ref(),
    );
    let navigation_fee = schedule.atc_navigation_flat;

    let stop_total = landing_fee + parking_fee + passenger_fee + navigation_fee;

    Ok(BreakdownLine {
        airport: stop.airport.clone(),
        leg_type: stop.leg_type,
        billed_weight_mt: weight_mt,
        landing_fee,
        parking_fee,
        passenger_fee,
        navigation_fee,
        stop_total,
    })
}
