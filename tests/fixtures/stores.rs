//! Store records with delivery priorities.
//!
//! Coordinates are real Las Vegas / Henderson locations from OpenStreetMap.

use route_planner::WaypointRecord;

#[derive(Debug, Clone, Copy)]
pub struct Store {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub priority: Option<&'static str>,
}

impl Store {
    pub const fn new(name: &'static str, lat: f64, lng: f64, priority: Option<&'static str>) -> Self {
        Self {
            name,
            lat,
            lng,
            priority,
        }
    }

    pub fn record(&self) -> WaypointRecord {
        WaypointRecord::new(self.lat, self.lng, self.priority)
    }
}

pub const STORES: &[Store] = &[
    Store::new("Wynn Las Vegas", 36.1263781, -115.1658180, Some("Mid")),
    Store::new("MGM Grand", 36.1023654, -115.1688720, Some("High")),
    Store::new("Bellagio", 36.1126, -115.1767, Some("Low")),
    Store::new("Longhorn Casino", 36.1070664, -115.0591256, None),
    Store::new("Bootlegger Bistro", 36.0492047, -115.1715744, Some("High")),
    Store::new("Sunset Station Area", 36.0614, -115.0631, Some("Low")),
    Store::new("I Love Sushi Henderson", 35.9916660, -115.1028343, Some("Mid")),
    Store::new("Beers and Bets", 36.1428945, -115.1573836, Some("High")),
];

pub fn store_records() -> Vec<WaypointRecord> {
    STORES.iter().map(Store::record).collect()
}
