//! HTTP API module for the ground-handling cost engine.
//!
//! This module provides the REST API endpoints for estimating route and
//! multi-route handling costs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MultiRouteQuoteRequest, RouteQuoteRequest, StopRequest};
pub use response::ApiError;
pub use state::AppState;
