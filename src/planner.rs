//! End-to-end planning workflow.
//!
//! parse records -> weighted cost matrix -> visiting order -> road geometry
//! for that same order -> report. Each call builds its own matrix and solver;
//! nothing is shared between plans.

use crate::config::PlannerConfig;
use crate::cost_matrix::CostMatrix;
use crate::error::{Result, RoutingError};
use crate::osrm::OsrmClient;
use crate::report::RouteReport;
use crate::solver::{CheapestArc, LocalSearch, RouteSolver};
use crate::traits::{RoadRouter, RouteConstruction};
use crate::waypoint::{Coordinate, Waypoint, WaypointRecord, parse_records};

#[derive(Debug, Clone)]
pub struct RoutePlanner<R = OsrmClient, C = LocalSearch<CheapestArc>> {
    config: PlannerConfig,
    router: R,
    strategy: C,
}

impl RoutePlanner {
    /// Planner backed by OSRM with cheapest-arc construction and
    /// `config.local_search_iterations` passes of local search.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        let router = OsrmClient::new(config.osrm.clone())?;
        let strategy = LocalSearch::new(CheapestArc, config.local_search_iterations);
        Ok(Self::with_parts(config, router, strategy))
    }
}

impl<R: RoadRouter, C: RouteConstruction> RoutePlanner<R, C> {
    pub fn with_parts(config: PlannerConfig, router: R, strategy: C) -> Self {
        Self {
            config,
            router,
            strategy,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route over raw ingestion records.
    pub fn plan(&self, records: &[WaypointRecord]) -> Result<RouteReport> {
        let waypoints = parse_records(records)?;
        self.plan_waypoints(&waypoints)
    }

    /// Plan a route over already-validated waypoints. The first waypoint is
    /// the start.
    #[tracing::instrument(skip_all, fields(waypoints = waypoints.len()))]
    pub fn plan_waypoints(&self, waypoints: &[Waypoint]) -> Result<RouteReport> {
        if waypoints.is_empty() {
            return Err(RoutingError::SolveInfeasible(
                "no waypoints to visit".to_string(),
            ));
        }

        let matrix = CostMatrix::build(waypoints);
        let solver = RouteSolver::new(&self.strategy, self.config.return_to_start);
        let order = solver.solve(&matrix)?;

        let stops = order.stops();
        let coordinates: Vec<Coordinate> = stops
            .iter()
            .map(|&index| waypoints[index].coordinate())
            .collect();

        // Geometry follows the optimized order so the path and the reported
        // stop sequence describe the same drive.
        let geometry = self.router.resolve(&coordinates)?;

        let report = RouteReport::assemble(
            stops,
            coordinates,
            geometry,
            self.config.average_speed_kmh,
        );
        tracing::info!(
            distance_km = report.distance_km,
            estimated_hours = report.estimated_hours,
            "route planned"
        );
        Ok(report)
    }
}
