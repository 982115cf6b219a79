//! Quote and breakdown models.
//!
//! This module defines the derived, read-only result types produced by the
//! cost engine: the per-stop breakdown line and the aggregated quote.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::LegType;

/// The itemized charges for one stop.
///
/// All fee amounts are in the quote currency. The billed weight is the MTOW
/// rounded to the nearest metric tonne, which is the basis for all
/// weight-proportional fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The airport identifier as supplied in the request.
    pub airport: String,
    /// Whether the leg was billed as domestic or international.
    pub leg_type: LegType,
    /// The billed weight in metric tonnes.
    pub billed_weight_mt: u32,
    /// The landing fee for this stop.
    pub landing_fee: Decimal,
    /// The parking fee for this stop.
    pub parking_fee: Decimal,
    /// The passenger facility (UDF) fee for this stop.
    pub passenger_fee: Decimal,
    /// The flat navigation fee for this stop.
    pub navigation_fee: Decimal,
    /// The sum of all fees for this stop.
    pub stop_total: Decimal,
}

/// The final quote for a route or batch of routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The currency all amounts are expressed in.
    pub currency: String,
    /// Per-stop itemized charges, in request order.
    pub breakdown: Vec<BreakdownLine>,
    /// Sum of all stop totals.
    pub total_handling_charges: Decimal,
    /// Sum of all flight operating costs.
    pub total_flight_cost: Decimal,
    /// Handling charges plus flight cost.
    pub subtotal: Decimal,
    /// GST applied to the subtotal.
    pub tax: Decimal,
    /// The fixed uplift added after tax.
    pub fixed_uplift: Decimal,
    /// The final estimated cost.
    pub final_cost: Decimal,
}
