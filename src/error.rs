//! Error types for the ground-handling cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during cost estimation.

use thiserror::Error;

/// The main error type for the ground-handling cost engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tariff_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tariffs.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tariff configuration file not found: /missing/tariffs.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Tariff configuration file was not found at the specified path.
    #[error("Tariff configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Tariff configuration file could not be parsed.
    #[error("Failed to parse tariff configuration '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tariff schedule failed load-time validation.
    #[error("Invalid tariff schedule for airport '{airport}': {message}")]
    InvalidTariff {
        /// The airport whose schedule is invalid.
        airport: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// No tariff schedule is configured for the requested airport.
    #[error("No tariff configured for airport: {airport}")]
    TariffNotFound {
        /// The airport identifier that was not found.
        airport: String,
    },

    /// A stop contained out-of-range or inconsistent data.
    #[error("Invalid stop at airport '{airport}': {message}")]
    InvalidStop {
        /// The airport of the invalid stop.
        airport: String,
        /// A description of what made the stop invalid.
        message: String,
    },

    /// A route contained out-of-range data.
    #[error("Invalid route: {message}")]
    InvalidRoute {
        /// A description of what made the route invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
