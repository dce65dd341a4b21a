//! route-planner core
//!
//! Orders priority-tagged waypoints for a single vehicle and resolves the
//! drivable road path for the chosen order.

pub mod config;
pub mod cost_matrix;
pub mod error;
pub mod haversine;
pub mod osrm;
pub mod planner;
pub mod polyline;
pub mod report;
pub mod solver;
pub mod traits;
pub mod waypoint;

pub use config::PlannerConfig;
pub use cost_matrix::CostMatrix;
pub use error::{Result, RoutingError};
pub use planner::RoutePlanner;
pub use polyline::{Polyline, RouteGeometry};
pub use report::RouteReport;
pub use solver::{CheapestArc, LocalSearch, RouteSolver, VisitingOrder};
pub use waypoint::{Coordinate, Priority, Waypoint, WaypointRecord};
