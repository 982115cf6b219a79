//! HTTP request handlers for the ground-handling cost engine API.
//!
//! This module contains the handler functions for the single-route and
//! multi-route estimation endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{quote_batch, quote_route};
use crate::models::Route;

use super::request::{MultiRouteQuoteRequest, RouteQuoteRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate-cost", post(estimate_cost_handler))
        .route("/estimate-multiway-cost", post(estimate_multiway_cost_handler))
        .with_state(state)
}

/// Handler for POST /estimate-cost.
///
/// Accepts a single multi-stop route and returns its quote.
async fn estimate_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<RouteQuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing route estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let route: Route = request.into();

    let start_time = Instant::now();
    match quote_route(&route, state.store()) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                stops_count = route.stops.len(),
                final_cost = %quote.final_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Route estimate completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(quote),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Route estimate failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /estimate-multiway-cost.
///
/// Accepts a batch of routes and returns one combined quote with a single
/// tax and uplift application over the grand total.
async fn estimate_multiway_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<MultiRouteQuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing multiway estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let routes: Vec<Route> = request.routes.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match quote_batch(&routes, state.store()) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                routes_count = routes.len(),
                final_cost = %quote.final_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Multiway estimate completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(quote),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Multiway estimate failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TariffStore;
    use crate::models::Quote;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let store = TariffStore::load("./config/tariffs.yaml").expect("Failed to load tariffs");
        AppState::new(store)
    }

    fn create_valid_body() -> String {
        serde_json::json!({
            "stops": [
                {
                    "airport": "DELHI IGI",
                    "leg_type": "domestic",
                    "mtow_kg": "50000"
                }
            ],
            "flight_hours": "2",
            "hourly_rate": "50000"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(create_valid_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let quote: Quote = serde_json::from_slice(&body).unwrap();

        assert_eq!(quote.currency, "INR");
        assert_eq!(quote.breakdown.len(), 1);
        assert_eq!(quote.final_cost, Decimal::from_str("159019.00").unwrap());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let router = create_router(create_test_state());

        // Missing hourly_rate
        let body = r#"{
            "stops": [],
            "flight_hours": "2"
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("hourly_rate"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_unknown_airport_returns_400() {
        let router = create_router(create_test_state());

        let body = serde_json::json!({
            "stops": [
                {
                    "airport": "UNKNOWN",
                    "leg_type": "domestic",
                    "mtow_kg": "50000"
                }
            ],
            "flight_hours": "2",
            "hourly_rate": "50000"
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "TARIFF_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_multiway_endpoint_combines_routes() {
        let router = create_router(create_test_state());

        let body = serde_json::json!({
            "routes": [
                {
                    "stops": [
                        { "airport": "DELHI IGI", "leg_type": "domestic", "mtow_kg": "50000" }
                    ],
                    "flight_hours": "2",
                    "hourly_rate": "50000"
                },
                {
                    "stops": [
                        { "airport": "HYDERABAD RGIA", "leg_type": "domestic", "mtow_kg": "50000" }
                    ],
                    "flight_hours": "1",
                    "hourly_rate": "40000"
                }
            ]
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-multiway-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let quote: Quote = serde_json::from_slice(&body).unwrap();

        // 22050 (Delhi) + 4000 (Hyderabad minimum) handling, 140000 flight
        assert_eq!(quote.breakdown.len(), 2);
        assert_eq!(
            quote.total_handling_charges,
            Decimal::from_str("26050").unwrap()
        );
        assert_eq!(quote.total_flight_cost, Decimal::from_str("140000").unwrap());
        // One tax and one uplift over the grand total
        assert_eq!(
            quote.final_cost,
            Decimal::from_str("210939.00").unwrap() // 166050 * 1.18 + 15000
        );
    }

    #[tokio::test]
    async fn test_multiway_unknown_airport_fails_whole_batch() {
        let router = create_router(create_test_state());

        let body = serde_json::json!({
            "routes": [
                {
                    "stops": [
                        { "airport": "DELHI IGI", "leg_type": "domestic", "mtow_kg": "50000" }
                    ],
                    "flight_hours": "2",
                    "hourly_rate": "50000"
                },
                {
                    "stops": [
                        { "airport": "UNKNOWN", "leg_type": "domestic", "mtow_kg": "50000" }
                    ],
                    "flight_hours": "1",
                    "hourly_rate": "40000"
                }
            ]
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-multiway-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "TARIFF_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_mtow_returns_400() {
        let router = create_router(create_test_state());

        let body = serde_json::json!({
            "stops": [
                {
                    "airport": "DELHI IGI",
                    "leg_type": "domestic",
                    "mtow_kg": "-50000"
                }
            ],
            "flight_hours": "2",
            "hourly_rate": "50000"
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate-cost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_STOP");
    }
}
