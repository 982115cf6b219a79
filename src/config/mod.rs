//! Tariff configuration loading and lookup for the cost engine.
//!
//! This module provides functionality to load airport tariff schedules from
//! a YAML file, validate them at load time, and look them up by airport
//! identifier during quoting.
//!
//! # Example
//!
//! ```no_run
//! use tariff_engine::config::TariffStore;
//!
//! let store = TariffStore::load("./config/tariffs.yaml").unwrap();
//! let schedule = store.get("delhi igi").unwrap();
//! println!("Landing minimum: {}", schedule.landing.domestic_min);
//! ```

mod loader;
mod types;

pub use loader::TariffStore;
pub use types::{LandingRule, ParkingRule, PassengerFeeRule, TariffConfig, TariffSchedule, WeightSlab};
