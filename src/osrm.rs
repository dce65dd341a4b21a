//! OSRM HTTP adapter for road geometry.
//!
//! Uses the Route service: `{base_url}/route/v1/{profile}/{lng,lat;...}`
//! with full GeoJSON overview. See
//! <http://project-osrm.org/docs/v5.24.0/api/#route-service>.

use serde::Deserialize;

use crate::error::{Result, RoutingError};
use crate::polyline::{Polyline, RouteGeometry};
use crate::traits::RoadRouter;
use crate::waypoint::Coordinate;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, coordinates: &[Coordinate]) -> String {
        let coords = coordinates
            .iter()
            .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl RoadRouter for OsrmClient {
    #[tracing::instrument(skip(self, coordinates), fields(stops = coordinates.len()))]
    fn resolve(&self, coordinates: &[Coordinate]) -> Result<RouteGeometry> {
        match coordinates {
            [] => return Err(RoutingError::NoCoordinates),
            [only] => return Ok(RouteGeometry::single_point(*only)),
            _ => {}
        }

        let url = self.route_url(coordinates);
        let unreachable = |message: String| RoutingError::ServiceUnreachable {
            url: url.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| unreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "routing service returned error status");
            let body = response.text().unwrap_or_default();
            // OSRM answers bad queries (NoRoute, InvalidQuery, ...) with a 400
            // and its usual code/message envelope.
            if status.is_client_error() {
                if let Some(message) = error_envelope_message(&body) {
                    return Err(RoutingError::ServiceError { message });
                }
            }
            return Err(unreachable(format!(
                "HTTP status {}: {}",
                status,
                body_excerpt(&body)
            )));
        }

        let body = response
            .text()
            .map_err(|err| unreachable(err.to_string()))?;
        let geometry = parse_route_body(&body)?;

        tracing::debug!(
            points = geometry.path.points().len(),
            distance_meters = geometry.distance_meters,
            "resolved road geometry"
        );
        Ok(geometry)
    }
}

/// Interpret the body of a successful HTTP response.
///
/// An OSRM `code` other than `"Ok"` becomes [`RoutingError::ServiceError`]
/// carrying the service's message.
pub fn parse_route_body(body: &str) -> Result<RouteGeometry> {
    let response: OsrmRouteResponse =
        serde_json::from_str(body).map_err(|err| RoutingError::ServiceError {
            message: format!("malformed route response: {}", err),
        })?;

    if response.code != "Ok" {
        return Err(RoutingError::ServiceError {
            message: response.message.unwrap_or(response.code),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::ServiceError {
            message: "route response contained no routes".to_string(),
        })?;

    Ok(RouteGeometry::new(
        Polyline::from_lon_lat(&route.geometry.coordinates),
        route.distance,
    ))
}

/// Message of an OSRM error envelope (`code` other than `"Ok"`), if `body`
/// is one.
fn error_envelope_message(body: &str) -> Option<String> {
    let response: OsrmRouteResponse = serde_json::from_str(body).ok()?;
    (response.code != "Ok").then(|| response.message.unwrap_or(response.code))
}

const BODY_EXCERPT_CHARS: usize = 200;

fn body_excerpt(body: &str) -> &str {
    let body = body.trim();
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: f64,
    geometry: GeoJsonLineString,
}

#[derive(Debug, Deserialize)]
struct GeoJsonLineString {
    coordinates: Vec<[f64; 2]>,
}
