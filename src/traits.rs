//! Pluggable seams of the planner.
//!
//! The solver strategy and the road router are both swappable so a stronger
//! optimizer or a different routing backend can be dropped in without
//! touching the rest of the pipeline.

use crate::cost_matrix::CostMatrix;
use crate::error::Result;
use crate::polyline::RouteGeometry;
use crate::waypoint::Coordinate;

/// Produces a visiting order over a cost matrix.
pub trait RouteConstruction {
    /// Return a permutation of `0..matrix.len()` starting at index 0.
    ///
    /// When `closed` is true the strategy should account for the arc back to
    /// index 0 when comparing candidates; the returned permutation itself
    /// never repeats the start.
    fn construct_route(&self, matrix: &CostMatrix, closed: bool) -> Result<Vec<usize>>;
}

/// Resolves an ordered coordinate sequence into a drivable path.
pub trait RoadRouter {
    fn resolve(&self, coordinates: &[Coordinate]) -> Result<RouteGeometry>;
}

impl<T: RouteConstruction + ?Sized> RouteConstruction for &T {
    fn construct_route(&self, matrix: &CostMatrix, closed: bool) -> Result<Vec<usize>> {
        (**self).construct_route(matrix, closed)
    }
}

impl<T: RouteConstruction + ?Sized> RouteConstruction for Box<T> {
    fn construct_route(&self, matrix: &CostMatrix, closed: bool) -> Result<Vec<usize>> {
        (**self).construct_route(matrix, closed)
    }
}

impl<T: RoadRouter + ?Sized> RoadRouter for Box<T> {
    fn resolve(&self, coordinates: &[Coordinate]) -> Result<RouteGeometry> {
        (**self).resolve(coordinates)
    }
}
