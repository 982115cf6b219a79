//! Stop model and related types.
//!
//! This module defines the Stop struct and LegType enum for representing
//! a single aircraft movement at an airport.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents whether a leg is a domestic or international movement.
///
/// The leg type selects the landing fee rule (flat rate with minimum vs.
/// weight slabs) and the passenger facility fee rate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegType {
    /// A domestic movement.
    Domestic,
    /// An international movement.
    International,
}

/// Represents one aircraft movement at one airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// The airport identifier, e.g. "DELHI IGI". Matched case-insensitively
    /// against the tariff store.
    pub airport: String,
    /// Whether the leg is domestic or international.
    pub leg_type: LegType,
    /// Maximum takeoff weight of the aircraft in kilograms. Must be > 0.
    pub mtow_kg: Decimal,
    /// Billable gate/stand time in hours.
    #[serde(default)]
    pub parking_hours: Decimal,
    /// Number of departing passengers.
    #[serde(default)]
    pub pax_departing: u32,
    /// Number of arriving passengers.
    #[serde(default)]
    pub pax_arriving: u32,
}

impl Stop {
    /// Validates the numeric constraints on this stop.
    ///
    /// A stop is valid when its MTOW is strictly positive and its parking
    /// hours are not negative. Passenger counts are unsigned and need no
    /// range check.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStop`] describing the first violated
    /// constraint.
    pub fn validate(&self) -> EngineResult<()> {
        if self.mtow_kg <= Decimal::ZERO {
            return Err(EngineError::InvalidStop {
                airport: self.airport.clone(),
                message: "mtow_kg must be greater than zero".to_string(),
            });
        }
        if self.parking_hours < Decimal::ZERO {
            return Err(EngineError::InvalidStop {
                airport: self.airport.clone(),
                message: "parking_hours must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
