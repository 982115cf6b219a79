//! Ground-Handling Cost Estimation Engine
//!
//! This crate computes airport ground-handling cost estimates for aircraft
//! stops (landing fees, parking fees, passenger facility fees, navigation
//! charges) and aggregates them with flight operating cost, GST, and a fixed
//! uplift to produce a final quote.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
