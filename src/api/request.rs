//! Request types for the ground-handling cost engine API.
//!
//! This module defines the JSON request structures for the `/estimate-cost`
//! and `/estimate-multiway-cost` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LegType, Route, Stop};

/// Request body for the `/estimate-cost` endpoint.
///
/// Contains the stops to price plus the flight time and hourly operating
/// rate for the flight cost component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuoteRequest {
    /// The stops along the route, in order.
    pub stops: Vec<StopRequest>,
    /// Total flight duration in hours.
    pub flight_hours: Decimal,
    /// Hourly operating rate for the aircraft.
    pub hourly_rate: Decimal,
}

/// Request body for the `/estimate-multiway-cost` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiRouteQuoteRequest {
    /// The routes to quote as one combined estimate.
    pub routes: Vec<RouteQuoteRequest>,
}

/// Stop information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopRequest {
    /// Airport identifier, e.g. "DELHI IGI". Matched case-insensitively.
    pub airport: String,
    /// Whether the leg is domestic or international.
    pub leg_type: LegType,
    /// Aircraft MTOW in kilograms.
    pub mtow_kg: Decimal,
    /// Gate/stand time to bill, in hours.
    #[serde(default)]
    pub parking_hours: Decimal,
    /// Number of departing passengers.
    #[serde(default)]
    pub pax_departing: u32,
    /// Number of arriving passengers.
    #[serde(default)]
    pub pax_arriving: u32,
}

impl From<StopRequest> for Stop {
    fn from(req: StopRequest) -> Self {
        Stop {
            airport: req.airport,
            leg_type: req.leg_type,
            mtow_kg: req.mtow_kg,
            parking_hours: req.parking_hours,
            pax_departing: req.pax_departing,
            pax_arriving: req.pax_arriving,
        }
    }
}

impl From<RouteQuoteRequest> for Route {
    fn from(req: RouteQuoteRequest) -> Self {
        Route {
            stops: req.stops.into_iter().map(Into::into).collect(),
            flight_hours: req.flight_hours,
            hourly_rate: req.hourly_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_route_quote_request() {
        let json = r#"{
            "stops": [
                {
                    "airport": "DELHI IGI",
                    "leg_type": "domestic",
                    "mtow_kg": "50000",
                    "parking_hours": "3.0",
                    "pax_departing": 120,
                    "pax_arriving": 110
                }
            ],
            "flight_hours": "2",
            "hourly_rate": "50000"
        }"#;

        let request: RouteQuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.stops.len(), 1);
        assert_eq!(request.stops[0].airport, "DELHI IGI");
        assert_eq!(request.stops[0].leg_type, LegType::Domestic);
        assert_eq!(request.flight_hours, Decimal::from_str("2").unwrap());
    }

    #[test]
    fn test_deserialize_stop_with_defaults() {
        let json = r#"{
            "airport": "HYDERABAD RGIA",
            "leg_type": "international",
            "mtow_kg": "185000"
        }"#;

        let stop: StopRequest = serde_json::from_str(json).unwrap();
        assert_eq!(stop.parking_hours, Decimal::ZERO);
        assert_eq!(stop.pax_departing, 0);
        assert_eq!(stop.pax_arriving, 0);
    }

    #[test]
    fn test_deserialize_multi_route_request() {
        let json = r#"{
            "routes": [
                { "stops": [], "flight_hours": "2", "hourly_rate": "50000" },
                { "stops": [], "flight_hours": "1", "hourly_rate": "40000" }
            ]
        }"#;

        let request: MultiRouteQuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.routes.len(), 2);
    }

    #[test]
    fn test_negative_pax_count_rejected() {
        let json = r#"{
            "airport": "DELHI IGI",
            "leg_type": "domestic",
            "mtow_kg": "50000",
            "pax_departing": -1
        }"#;

        assert!(serde_json::from_str::<StopRequest>(json).is_err());
    }

    #[test]
    fn test_stop_conversion() {
        let req = StopRequest {
            airport: "DELHI IGI".to_string(),
            leg_type: LegType::International,
            mtow_kg: Decimal::from_str("185000").unwrap(),
            parking_hours: Decimal::from_str("4.5").unwrap(),
            pax_departing: 250,
            pax_arriving: 240,
        };

        let stop: Stop = req.into();
        assert_eq!(stop.airport, "DELHI IGI");
        assert_eq!(stop.leg_type, LegType::International);
        assert_eq!(stop.pax_departing, 250);
    }

    #[test]
    fn test_route_conversion() {
        let req = RouteQuoteRequest {
            stops: vec![StopRequest {
                airport: "DELHI IGI".to_string(),
                leg_type: LegType::Domestic,
                mtow_kg: Decimal::from_str("50000").unwrap(),
                parking_hours: Decimal::ZERO,
                pax_departing: 0,
                pax_arriving: 0,
            }],
            flight_hours: Decimal::from_str("2").unwrap(),
            hourly_rate: Decimal::from_str("50000").unwrap(),
        };

        let route: Route = req.into();
        assert_eq!(route.stops.len(), 1);
        assert_eq!(route.flight_cost(), Decimal::from_str("100000").unwrap());
    }
}
