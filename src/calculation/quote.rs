//! Quote aggregation functionality.
//!
//! This module turns priced stops into a final quote: handling charges and
//! flight cost are summed into a subtotal, GST is applied, and the fixed
//! uplift is added. The single-route and batch entry points share the same
//! aggregation; a batch applies tax and uplift once over the grand total,
//! never per route.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::price_stop;
use crate::config::TariffStore;
use crate::error::EngineResult;
use crate::models::{BreakdownLine, Quote, Route};

/// The GST rate applied to every subtotal (18%).
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// The fixed uplift added once to every quote, in the store currency.
pub const FIXED_UPLIFT: Decimal = Decimal::from_parts(15000, 0, 0, false, 0);

/// Produces a quote for one multi-stop route.
///
/// # Errors
///
/// Returns the first validation, tariff lookup, or stop pricing error; no
/// partial breakdown is produced.
///
/// # Examples
///
/// ```no_run
/// use tariff_engine::calculation::quote_route;
/// use tariff_engine::config::TariffStore;
/// use tariff_engine::models::{LegType, Route, Stop};
/// use rust_decimal::Decimal;
///
/// let store = TariffStore::load("./config/tariffs.yaml").unwrap();
/// let route = Route {
///     stops: vec![Stop {
///         airport: "DELHI IGI".to_string(),
///         leg_type: LegType::Domestic,
///         mtow_kg: Decimal::new(50000, 0),
///         parking_hours: Decimal::ZERO,
///         pax_departing: 0,
///         pax_arriving: 0,
///     }],
///     flight_hours: Decimal::new(2, 0),
///     hourly_rate: Decimal::new(50000, 0),
/// };
///
/// let quote = quote_route(&route, &store).unwrap();
/// assert_eq!(quote.final_cost, Decimal::new(159019, 0));
/// ```
pub fn quote_route(route: &Route, store: &TariffStore) -> EngineResult<Quote> {
    route.validate()?;

    let mut breakdown = Vec::with_capacity(route.stops.len());
    for stop in &route.stops {
        breakdown.push(price_stop(stop, store)?);
    }

    Ok(assemble_quote(breakdown, route.flight_cost(), store))
}

/// Produces one combined quote for a batch of routes.
///
/// Handling charges and flight costs are summed across all routes and all
/// their stops before a single GST and uplift application. This changes the
/// total compared to summing independently-taxed per-route quotes, and is
/// the required behavior.
///
/// # Errors
///
/// A failure in any route aborts the entire batch; no partial breakdown is
/// produced.
pub fn quote_batch(routes: &[Route], store: &TariffStore) -> EngineResult<Quote> {
    let mut breakdown = Vec::new();
    let mut total_flight_cost = Decimal::ZERO;

    for route in routes {
        route.validate()?;
        for stop in &route.stops {
            breakdown.push(price_stop(stop, store)?);
        }
        total_flight_cost += route.flight_cost();
    }

    Ok(assemble_quote(breakdown, total_flight_cost, store))
}

/// Applies the shared aggregation arithmetic to priced stops.
fn assemble_quote(
    breakdown: Vec<BreakdownLine>,
    total_flight_cost: Decimal,
    store: &TariffStore,
) -> Quote {
    let total_handling_charges: Decimal = breakdown.iter().map(|line| line.stop_total).sum();
    let subtotal = total_handling_charges + total_flight_cost;
    let tax = subtotal * GST_RATE;
    let final_cost = subtotal + tax + FIXED_UPLIFT;

    Quote {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: store.currency().to_string(),
        breakdown,
        total_handling_charges,
        total_flight_cost,
        subtotal,
        tax,
        fixed_uplift: FIXED_UPLIFT,
        final_cost,
    }
}
