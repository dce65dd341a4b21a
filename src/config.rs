//! Planner configuration.

use serde::Deserialize;

use crate::osrm::OsrmConfig;

/// Assumed average driving speed for ETA estimates.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Average driving speed in km/h used for `estimated_hours`.
    pub average_speed_kmh: f64,
    /// Report the route as returning to the first waypoint.
    pub return_to_start: bool,
    /// Maximum local search passes after construction. 0 keeps the
    /// cheapest-arc route as is.
    pub local_search_iterations: usize,
    pub osrm: OsrmConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_SPEED_KMH,
            return_to_start: true,
            local_search_iterations: 100,
            osrm: OsrmConfig::default(),
        }
    }
}
