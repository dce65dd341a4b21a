//! Polyline representation for route geometries.
//!
//! Points are kept decoded as (latitude, longitude). Routing services speak
//! GeoJSON order (longitude, latitude); conversion happens once at that
//! boundary via [`Polyline::from_lon_lat`].

use serde::{Deserialize, Serialize};

use crate::waypoint::Coordinate;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from (latitude, longitude) points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Creates a Polyline from GeoJSON-ordered `[longitude, latitude]` pairs.
    pub fn from_lon_lat(pairs: &[[f64; 2]]) -> Self {
        Self {
            points: pairs.iter().map(|[lng, lat]| (*lat, *lng)).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

/// A drivable path and its length as reported by the road router.
///
/// Treated as opaque data once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub path: Polyline,
    pub distance_meters: f64,
}

impl RouteGeometry {
    pub fn new(path: Polyline, distance_meters: f64) -> Self {
        Self {
            path,
            distance_meters,
        }
    }

    /// Zero-length geometry sitting on a single point.
    pub fn single_point(point: Coordinate) -> Self {
        Self::new(Polyline::new(vec![point]), 0.0)
    }
}
