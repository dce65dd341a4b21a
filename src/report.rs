//! Caller-facing route summary.

use serde::Serialize;

use crate::polyline::RouteGeometry;
use crate::waypoint::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Waypoint indices in driving order, including the return to the start
    /// for closed routes.
    pub order: Vec<usize>,
    /// Coordinates of `order`.
    pub coordinates: Vec<Coordinate>,
    pub distance_km: f64,
    pub estimated_hours: f64,
    pub geometry: RouteGeometry,
}

impl RouteReport {
    /// Assemble the report. ETA assumes a constant `average_speed_kmh`.
    pub fn assemble(
        order: Vec<usize>,
        coordinates: Vec<Coordinate>,
        geometry: RouteGeometry,
        average_speed_kmh: f64,
    ) -> Self {
        let meters = geometry.distance_meters;
        Self {
            order,
            coordinates,
            distance_km: meters / 1000.0,
            estimated_hours: meters / (average_speed_kmh * 1000.0),
            geometry,
        }
    }
}
