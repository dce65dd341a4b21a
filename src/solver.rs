//! Single-vehicle route solver.
//!
//! Index 0 is the start. The default strategy is cheapest-arc construction:
//! from the last placed stop, extend to the cheapest unvisited waypoint,
//! breaking ties toward the lowest index. [`LocalSearch`] layers 2-opt and
//! relocate moves on top of any construction strategy.

use crate::cost_matrix::CostMatrix;
use crate::error::{Result, RoutingError};
use crate::traits::RouteConstruction;

/// Order in which waypoints are visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitingOrder {
    permutation: Vec<usize>,
    closed: bool,
}

impl VisitingOrder {
    /// Each waypoint index exactly once, starting at 0.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Stops as driven. A closed order with more than one waypoint returns
    /// to index 0 at the end.
    pub fn stops(&self) -> Vec<usize> {
        closed_stops(&self.permutation, self.closed)
    }

    /// Weighted cost of driving [`VisitingOrder::stops`].
    pub fn total_cost(&self, matrix: &CostMatrix) -> u64 {
        matrix.path_cost(&self.stops())
    }

    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }
}

fn closed_stops(permutation: &[usize], closed: bool) -> Vec<usize> {
    let mut stops = permutation.to_vec();
    if closed && permutation.len() > 1 {
        stops.push(permutation[0]);
    }
    stops
}

/// Greedy cheapest-arc construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestArc;

impl RouteConstruction for CheapestArc {
    fn construct_route(&self, matrix: &CostMatrix, _closed: bool) -> Result<Vec<usize>> {
        let n = matrix.len();
        if n == 0 {
            return Err(RoutingError::SolveInfeasible(
                "no waypoints to visit".to_string(),
            ));
        }

        let mut visited = vec![false; n];
        let mut route = Vec::with_capacity(n);
        let mut current = 0;
        visited[current] = true;
        route.push(current);

        while route.len() < n {
            let mut best: Option<(usize, u64)> = None;
            for (candidate, seen) in visited.iter().enumerate() {
                if *seen {
                    continue;
                }
                let cost = matrix.cost(current, candidate);
                // Strict comparison keeps the lowest index on ties.
                if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                    best = Some((candidate, cost));
                }
            }

            let (next, _) = best.ok_or_else(|| {
                RoutingError::SolveInfeasible("ran out of candidate arcs".to_string())
            })?;
            visited[next] = true;
            route.push(next);
            current = next;
        }

        Ok(route)
    }
}

/// Runs a construction strategy, then improves the route with 2-opt and
/// relocate moves until neither helps or `max_iterations` passes are spent.
#[derive(Debug, Clone)]
pub struct LocalSearch<C> {
    construction: C,
    max_iterations: usize,
}

impl<C> LocalSearch<C> {
    pub fn new(construction: C, max_iterations: usize) -> Self {
        Self {
            construction,
            max_iterations,
        }
    }
}

impl<C: RouteConstruction> RouteConstruction for LocalSearch<C> {
    fn construct_route(&self, matrix: &CostMatrix, closed: bool) -> Result<Vec<usize>> {
        let mut route = self.construction.construct_route(matrix, closed)?;
        // The moves below index the matrix with whatever the construction returned.
        validate_permutation(&route, matrix.len())?;

        for iteration in 0..self.max_iterations {
            let mut improved = two_opt_improve(&mut route, matrix, closed);
            if relocate_improve(&mut route, matrix, closed) {
                improved = true;
            }

            if !improved {
                tracing::debug!(iteration, "local search converged");
                break;
            }
        }

        Ok(route)
    }
}

/// 2-opt: Reverse a segment of the route to reduce weighted cost.
/// Position 0 never moves. Returns true if an improvement was made.
fn two_opt_improve(route: &mut [usize], matrix: &CostMatrix, closed: bool) -> bool {
    if route.len() < 3 {
        return false;
    }

    let current_cost = matrix.path_cost(&closed_stops(route, closed));
    let n = route.len();

    for i in 0..n - 1 {
        for j in i + 2..n {
            // Reverse segment [i+1..=j]
            let mut candidate = route.to_vec();
            candidate[i + 1..=j].reverse();

            // The matrix is asymmetric, so the reversed segment has to be
            // re-costed in full.
            let cost = matrix.path_cost(&closed_stops(&candidate, closed));
            if cost < current_cost {
                route[i + 1..=j].reverse();
                return true;
            }
        }
    }

    false
}

/// Relocate: Move one stop to another position in the route.
/// Position 0 never moves. Returns true if an improvement was made.
fn relocate_improve(route: &mut Vec<usize>, matrix: &CostMatrix, closed: bool) -> bool {
    if route.len() < 3 {
        return false;
    }

    let current_cost = matrix.path_cost(&closed_stops(route, closed));
    let n = route.len();

    for from in 1..n {
        for to in 1..n {
            if to == from {
                continue;
            }

            let mut candidate = route.clone();
            let stop = candidate.remove(from);
            candidate.insert(to, stop);

            let cost = matrix.path_cost(&closed_stops(&candidate, closed));
            if cost < current_cost {
                *route = candidate;
                return true;
            }
        }
    }

    false
}

/// Turns a cost matrix into a [`VisitingOrder`] using a pluggable strategy.
#[derive(Debug, Clone, Default)]
pub struct RouteSolver<C = CheapestArc> {
    strategy: C,
    closed: bool,
}

impl RouteSolver<CheapestArc> {
    pub fn cheapest_arc(closed: bool) -> Self {
        Self::new(CheapestArc, closed)
    }
}

impl<C: RouteConstruction> RouteSolver<C> {
    pub fn new(strategy: C, closed: bool) -> Self {
        Self { strategy, closed }
    }

    /// Solve for a visiting order.
    ///
    /// Fails with [`RoutingError::SolveInfeasible`] on an empty matrix, or
    /// when the strategy returns something other than a permutation
    /// starting at 0.
    pub fn solve(&self, matrix: &CostMatrix) -> Result<VisitingOrder> {
        let permutation = self.strategy.construct_route(matrix, self.closed)?;
        validate_permutation(&permutation, matrix.len())?;

        let order = VisitingOrder {
            permutation,
            closed: self.closed,
        };
        tracing::debug!(
            stops = order.len(),
            cost = order.total_cost(matrix),
            "solved visiting order"
        );
        Ok(order)
    }
}

fn validate_permutation(permutation: &[usize], n: usize) -> Result<()> {
    if n == 0 {
        return Err(RoutingError::SolveInfeasible(
            "no waypoints to visit".to_string(),
        ));
    }
    if permutation.len() != n || permutation.first() != Some(&0) {
        return Err(RoutingError::SolveInfeasible(format!(
            "strategy returned {} stops for {} waypoints",
            permutation.len(),
            n
        )));
    }

    let mut seen = vec![false; n];
    for &index in permutation {
        if index >= n || seen[index] {
            return Err(RoutingError::SolveInfeasible(format!(
                "strategy visited waypoint {} more than once or out of range",
                index
            )));
        }
        seen[index] = true;
    }
    Ok(())
}
