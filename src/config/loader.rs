//! Tariff store loading functionality.
//!
//! This module provides the [`TariffStore`] type for loading airport tariff
//! schedules from a YAML file and looking them up during quoting.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::{TariffConfig, TariffSchedule, WeightSlab};

/// Loads and provides access to airport tariff schedules.
///
/// The `TariffStore` reads a YAML tariff file, validates every schedule at
/// load time, and is read-only afterwards. Airport lookup is exact-match
/// after uppercasing; there is no fuzzy matching or aliasing.
///
/// # File Structure
///
/// ```text
/// currency: INR
/// airports:
///   DELHI IGI:
///     currency: INR
///     landing:
///       domestic_per_mt: "441.0"
///       domestic_min: "5788.0"
///       intl_slabs:
///         - { max_mt: 100, per_mt: "662.0" }
///         - { max_mt: null, per_mt: "772.0" }
///     parking:
///       domestic_per_mt_per_hr: "18.22"
///       free_hours: "2.0"
///       free_buffer_minutes: 15
///     udf:
///       domestic_depart: "1050.0"
///       domestic_arrive: "450.0"
///       intl_depart: "1540.0"
///       intl_arrive: "660.0"
///     atc_navigation_flat: "0.0"
/// ```
///
/// # Example
///
/// ```no_run
/// use tariff_engine::config::TariffStore;
///
/// let store = TariffStore::load("./config/tariffs.yaml").unwrap();
/// assert!(store.get("DELHI IGI").is_ok());
/// assert!(store.get("delhi igi").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TariffStore {
    currency: String,
    airports: HashMap<String, TariffSchedule>,
}

impl TariffStore {
    /// Loads the tariff store from the specified YAML file.
    ///
    /// Airport keys are uppercased at load time so that lookups are
    /// case-insensitive. Every schedule is validated; malformed slab tables
    /// are rejected here rather than failing mid-request.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing ([`EngineError::ConfigNotFound`]),
    /// is not valid YAML ([`EngineError::ConfigParseError`]), or contains a
    /// schedule that fails validation ([`EngineError::InvalidTariff`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: TariffConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Builds a tariff store from an already-parsed configuration.
    ///
    /// This is the path used by tests that construct schedules in code.
    pub fn from_config(config: TariffConfig) -> EngineResult<Self> {
        let mut airports = HashMap::with_capacity(config.airports.len());

        for (name, schedule) in config.airports {
            let key = name.to_uppercase();
            validate_schedule(&key, &schedule)?;
            warn_on_degenerate_data(&key, &schedule, &config.currency);
            airports.insert(key, schedule);
        }

        Ok(Self {
            currency: config.currency,
            airports,
        })
    }

    /// Returns the schedule for the given airport, matching case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TariffNotFound`] when no schedule is configured
    /// for the airport.
    pub fn get(&self, airport: &str) -> EngineResult<&TariffSchedule> {
        self.airports
            .get(&airport.to_uppercase())
            .ok_or_else(|| EngineError::TariffNotFound {
                airport: airport.to_string(),
            })
    }

    /// Returns the currency quotes are issued in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the number of configured airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if no airports are configured.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Validates the structural invariants of one schedule.
///
/// The international slab list must be ordered by ascending weight ceiling
/// and, unless empty, terminated by exactly one unbounded slab.
fn validate_schedule(airport: &str, schedule: &TariffSchedule) -> EngineResult<()> {
    validate_slabs(airport, &schedule.landing.intl_slabs)
}

fn validate_slabs(airport: &str, slabs: &[WeightSlab]) -> EngineResult<()> {
    if slabs.is_empty() {
        return Ok(());
    }

    let mut previous_max: Option<u32> = None;
    for (index, slab) in slabs.iter().enumerate() {
        match slab.max_mt {
            Some(max_mt) => {
                if index == slabs.len() - 1 {
                    return Err(EngineError::InvalidTariff {
                        airport: airport.to_string(),
                        message: "last international slab must be unbounded".to_string(),
                    });
                }
                if let Some(prev) = previous_max {
                    if max_mt <= prev {
                        return Err(EngineError::InvalidTariff {
                            airport: airport.to_string(),
                            message: format!(
                                "international slabs must have ascending ceilings, found {} after {}",
                                max_mt, prev
                            ),
                        });
                    }
                }
                previous_max = Some(max_mt);
            }
            None => {
                if index != slabs.len() - 1 {
                    return Err(EngineError::InvalidTariff {
                        airport: airport.to_string(),
                        message: "unbounded international slab must be last".to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Logs a warning for schedules that are legal but will under-bill.
///
/// Empty slab lists and zero rates are preserved as-is; an international leg
/// at such an airport bills a zero landing fee.
fn warn_on_degenerate_data(airport: &str, schedule: &TariffSchedule, store_currency: &str) {
    if schedule.landing.intl_slabs.is_empty() {
        warn!(
            airport = %airport,
            "no international landing slabs configured, international legs will bill zero landing fee"
        );
    }
    if schedule.landing.domestic_per_mt == Decimal::ZERO {
        warn!(
            airport = %airport,
            "domestic landing rate is zero, landing fee falls back to the configured minimum"
        );
    }
    if schedule.currency != store_currency {
        warn!(
            airport = %airport,
            schedule_currency = %schedule.currency,
            store_currency = %store_currency,
            "schedule currency differs from store currency, quotes are issued in the store currency"
        );
    }
}
