//! Tariff configuration types.
//!
//! This module contains the strongly-typed tariff structures that are
//! deserialized from the YAML tariff file.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// One weight-range-keyed rate tier for international landing fees.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightSlab {
    /// The inclusive upper weight bound in metric tonnes, or `None` for the
    /// unbounded terminal slab.
    pub max_mt: Option<u32>,
    /// The per-tonne rate charged for weights covered by this slab.
    pub per_mt: Decimal,
}

/// Landing fee rules for one airport.
#[derive(Debug, Clone, Deserialize)]
pub struct LandingRule {
    /// Domestic per-tonne rate.
    pub domestic_per_mt: Decimal,
    /// Minimum domestic landing fee.
    pub domestic_min: Decimal,
    /// International weight slabs, ordered by ascending weight ceiling with
    /// one unbounded terminal slab. An empty list means international
    /// landing is unconfigured and bills zero.
    #[serde(default)]
    pub intl_slabs: Vec<WeightSlab>,
}

/// Parking fee rules for one airport.
///
/// The domestic rate applies to both leg types. This is an intentional
/// simplification carried from the published rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkingRule {
    /// Per-tonne per-hour parking rate.
    pub domestic_per_mt_per_hr: Decimal,
    /// Free parking allowance in hours.
    #[serde(default)]
    pub free_hours: Decimal,
    /// Grace buffer in minutes added to the free allowance.
    #[serde(default)]
    pub free_buffer_minutes: u32,
}

/// Passenger facility (UDF) fee rates for one airport.
#[derive(Debug, Clone, Deserialize)]
pub struct PassengerFeeRule {
    /// Per-passenger rate for domestic departures.
    pub domestic_depart: Decimal,
    /// Per-passenger rate for domestic arrivals.
    pub domestic_arrive: Decimal,
    /// Per-passenger rate for international departures.
    pub intl_depart: Decimal,
    /// Per-passenger rate for international arrivals.
    pub intl_arrive: Decimal,
}

/// The complete fee schedule for one airport.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffSchedule {
    /// The currency the schedule's rates are expressed in.
    pub currency: String,
    /// Landing fee rules.
    pub landing: LandingRule,
    /// Parking fee rules.
    pub parking: ParkingRule,
    /// Passenger facility fee rates, if the airport levies a UDF.
    #[serde(default)]
    pub udf: Option<PassengerFeeRule>,
    /// Flat per-movement navigation charge.
    #[serde(default)]
    pub atc_navigation_flat: Decimal,
}

/// The tariff configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffConfig {
    /// The currency quotes are issued in.
    pub currency: String,
    /// Map of airport identifier to its fee schedule.
    pub airports: HashMap<String, TariffSchedule>,
}
