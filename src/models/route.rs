//! Route model.
//!
//! This module defines the Route struct: an ordered sequence of stops plus
//! the flight time and hourly operating rate used for the flight cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Stop;

/// Represents one multi-stop route to be quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The stops along the route, in order.
    pub stops: Vec<Stop>,
    /// Total flight duration in hours. Must not be negative.
    pub flight_hours: Decimal,
    /// Hourly operating rate for the aircraft. Must not be negative.
    pub hourly_rate: Decimal,
}

impl Route {
    /// Returns the flight operating cost for this route.
    ///
    /// # Examples
    ///
    /// ```
    /// use tariff_engine::models::Route;
    /// use rust_decimal::Decimal;
    ///
    /// let route = Route {
    ///     stops: vec![],
    ///     flight_hours: Decimal::new(2, 0),
    ///     hourly_rate: Decimal::new(50000, 0),
    /// };
    /// assert_eq!(route.flight_cost(), Decimal::new(100000, 0));
    /// ```
    pub fn flight_cost(&self) -> Decimal {
        self.flight_hours * self.hourly_rate
    }

    /// Validates the route and all of its stops.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRoute`] for negative flight hours or
    /// hourly rate, or the first [`EngineError::InvalidStop`] produced by
    /// a stop.
    pub fn validate(&self) -> EngineResult<()> {
        if self.flight_hours < Decimal::ZERO {
            return Err(EngineError::InvalidRoute {
                message: "flight_hours must not be negative".to_string(),
            });
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidRoute {
                message: "hourly_rate must not be negative".to_string(),
            });
        }
        for stop in &self.stops {
            stop.validate()?;
        }
        Ok(())
    }
}
