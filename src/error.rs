//! Error taxonomy for planning and road resolution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    /// An input record could not be turned into a waypoint.
    #[error("malformed input record {index}: {reason}")]
    MalformedInput { index: usize, reason: String },

    /// No visiting order could be constructed for the request.
    #[error("no feasible route: {0}")]
    SolveInfeasible(String),

    /// The routing service could not be reached or answered with a
    /// non-success HTTP status.
    #[error("routing service unreachable at {url}: {message}")]
    ServiceUnreachable { url: String, message: String },

    /// The routing service answered but refused to route the points.
    #[error("routing service error: {message}")]
    ServiceError { message: String },

    #[error("no coordinates to route")]
    NoCoordinates,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RoutingError>;
