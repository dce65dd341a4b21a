//! Waypoints and the priority weighting policy.
//!
//! Raw records arrive from an ingestion layer as loosely typed rows. They are
//! parsed once into [`Waypoint`]s; a waypoint's identity is its position in
//! the input sequence.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A (latitude, longitude) pair in decimal degrees.
pub type Coordinate = (f64, f64);

/// Service priority of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Mid,
    Low,
}

impl Priority {
    /// Parse a priority label. Only the exact spellings `High`, `Mid` and
    /// `Low` are recognized; anything else, or a missing label, is `Mid`.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(raw) = label else {
            return Priority::Mid;
        };

        match raw {
            "High" => Priority::High,
            "Mid" => Priority::Mid,
            "Low" => Priority::Low,
            _ => {
                tracing::warn!(label = raw, "unknown priority label, treating as Mid");
                Priority::Mid
            }
        }
    }

    /// Divisor applied to the raw distance of any arc ending at a waypoint
    /// with this priority.
    ///
    /// This is a planning bias, not a distance. Never use it to scale a
    /// real-world length.
    pub fn weight(self) -> u32 {
        match self {
            Priority::High => 3,
            Priority::Mid => 2,
            Priority::Low => 1,
        }
    }
}

/// Priority weight for a raw label, using the `Mid` default for anything
/// unrecognized.
pub fn weight_for_label(label: Option<&str>) -> u32 {
    Priority::from_label(label).weight()
}

/// A record as handed over by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WaypointRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub priority: Option<String>,
}

impl WaypointRecord {
    pub fn new(latitude: f64, longitude: f64, priority: Option<&str>) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            priority: priority.map(str::to_string),
        }
    }
}

/// A priority-tagged point to be visited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    coordinate: Coordinate,
    priority: Priority,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64, priority: Priority) -> Self {
        Self {
            coordinate: (latitude, longitude),
            priority,
        }
    }

    /// Validate a single record. `index` is the record's position in the
    /// input and is reported on failure.
    pub fn from_record(index: usize, record: &WaypointRecord) -> Result<Self> {
        let malformed = |reason: String| RoutingError::MalformedInput { index, reason };

        let latitude = record
            .latitude
            .ok_or_else(|| malformed("missing latitude".to_string()))?;
        let longitude = record
            .longitude
            .ok_or_else(|| malformed("missing longitude".to_string()))?;

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(malformed(format!("latitude {} out of range", latitude)));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(malformed(format!("longitude {} out of range", longitude)));
        }

        let priority = Priority::from_label(record.priority.as_deref());
        Ok(Self::new(latitude, longitude, priority))
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Parse every record, failing on the first malformed one.
pub fn parse_records(records: &[WaypointRecord]) -> Result<Vec<Waypoint>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Waypoint::from_record(index, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("High"), 3)]
    #[case(Some("Mid"), 2)]
    #[case(Some("Low"), 1)]
    #[case(Some(" low "), 2)]
    #[case(Some("HIGH"), 2)]
    #[case(Some("high"), 2)]
    #[case(Some("LOW"), 2)]
    #[case(Some("urgent"), 2)]
    #[case(Some(""), 2)]
    #[case(None, 2)]
    fn test_weight_for_label(#[case] label: Option<&str>, #[case] expected: u32) {
        assert_eq!(weight_for_label(label), expected);
    }

    #[test]
    fn test_priority_defaults_to_mid() {
        assert_eq!(Priority::default(), Priority::Mid);
    }

    #[test]
    fn test_parse_valid_record() {
        let record = WaypointRecord::new(36.1, -115.1, Some("High"));
        let waypoint = Waypoint::from_record(0, &record).unwrap();
        assert_eq!(waypoint.coordinate(), (36.1, -115.1));
        assert_eq!(waypoint.priority(), Priority::High);
    }

    #[test]
    fn test_missing_priority_is_mid() {
        let record = WaypointRecord::new(1.0, 2.0, None);
        let waypoint = Waypoint::from_record(0, &record).unwrap();
        assert_eq!(waypoint.priority(), Priority::Mid);
    }

    #[rstest]
    #[case(WaypointRecord { latitude: None, longitude: Some(1.0), priority: None }, "latitude")]
    #[case(WaypointRecord { latitude: Some(1.0), longitude: None, priority: None }, "longitude")]
    #[case(WaypointRecord::new(91.0, 0.0, None), "latitude")]
    #[case(WaypointRecord::new(0.0, -180.5, None), "longitude")]
    #[case(WaypointRecord::new(f64::NAN, 0.0, None), "latitude")]
    fn test_malformed_record_rejected(#[case] record: WaypointRecord, #[case] field: &str) {
        match Waypoint::from_record(4, &record) {
            Err(RoutingError::MalformedInput { index, reason }) => {
                assert_eq!(index, 4);
                assert!(reason.contains(field), "reason was {}", reason);
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_reports_offending_index() {
        let records = vec![
            WaypointRecord::new(0.0, 0.0, Some("High")),
            WaypointRecord::new(0.0, 1.0, Some("Low")),
            WaypointRecord::new(120.0, 0.0, None),
        ];
        let err = parse_records(&records).unwrap_err();
        assert!(matches!(err, RoutingError::MalformedInput { index: 2, .. }));
    }

    #[test]
    fn test_record_deserializes_without_priority() {
        let record: WaypointRecord =
            serde_json::from_str(r#"{"latitude": 12.5, "longitude": 77.6}"#).unwrap();
        assert_eq!(record.priority, None);
        assert_eq!(record.latitude, Some(12.5));
    }
}
