//! Calculation logic for the ground-handling cost engine.
//!
//! This module contains all the fee calculation functions: billed weight
//! rounding, domestic and international landing fees, parking fees with the
//! free-time allowance, passenger facility fees, per-stop pricing, and the
//! route and batch quote aggregation that applies GST and the fixed uplift.

mod billed_weight;
mod landing_fee;
mod parking_fee;
mod passenger_fee;
mod quote;
mod stop_pricing;

pub use billed_weight::billed_weight;
pub use landing_fee::{calculate_landing_fee, intl_slab_rate};
pub use parking_fee::{billable_parking_hours, calculate_parking_fee};
pub use passenger_fee::calculate_passenger_fee;
pub use quote::{FIXED_UPLIFT, GST_RATE, quote_batch, quote_route};
pub use stop_pricing::price_stop;
