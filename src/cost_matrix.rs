//! Priority-weighted pairwise cost matrix.
//!
//! `cost[i][j] = floor(haversine(i, j) / weight(j.priority))`. The divisor is
//! taken from the destination, so the matrix is generally asymmetric and
//! arcs into high-priority waypoints look cheaper than they are.

use rayon::prelude::*;

use crate::haversine::haversine_meters;
use crate::waypoint::Waypoint;

/// Square matrix of integer arc costs, indexed by waypoint position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: Vec<Vec<u64>>,
}

impl CostMatrix {
    /// Build the weighted matrix for `waypoints`.
    pub fn build(waypoints: &[Waypoint]) -> Self {
        let rows: Vec<Vec<u64>> = (0..waypoints.len())
            .into_par_iter()
            .map(|i| {
                let from = waypoints[i].coordinate();
                waypoints
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0
                        } else {
                            let meters = haversine_meters(from, to.coordinate());
                            (meters / f64::from(to.priority().weight())).floor() as u64
                        }
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(size = rows.len(), "built cost matrix");
        Self { rows }
    }

    /// Wrap precomputed rows. Returns `None` unless the rows form a square
    /// matrix with a zero diagonal.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Option<Self> {
        let n = rows.len();
        let square = rows.iter().all(|row| row.len() == n);
        let zero_diagonal = rows.iter().enumerate().all(|(i, row)| row.get(i) == Some(&0));
        (square && zero_diagonal).then_some(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cost of the arc `from -> to`.
    pub fn cost(&self, from: usize, to: usize) -> u64 {
        self.rows[from][to]
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Sum of arc costs along a stop sequence.
    pub fn path_cost(&self, stops: &[usize]) -> u64 {
        stops
            .windows(2)
            .map(|pair| self.cost(pair[0], pair[1]))
            .sum()
    }
}
