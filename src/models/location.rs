//! Picked address locations.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Geographic position (lat/lon) as supplied by the location source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates are finite numbers (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Convert to a `geo` coordinate (x = longitude, y = latitude)
    pub fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// A candidate address location.
///
/// Replaced wholesale whenever a new address is picked; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Position of the address itself
    pub reference_position: GeoPosition,

    /// Position where the address is reached from the road network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_access_position: Option<GeoPosition>,
}

impl Location {
    pub fn new(reference_position: GeoPosition) -> Self {
        Self {
            reference_position,
            road_access_position: None,
        }
    }

    pub fn with_road_access(mut self, road_access_position: GeoPosition) -> Self {
        self.road_access_position = Some(road_access_position);
        self
    }

    /// The point used for every containment test: the road access
    /// position when known, the reference position otherwise.
    pub fn effective_point(&self) -> Coord<f64> {
        self.road_access_position
            .unwrap_or(self.reference_position)
            .to_coord()
    }
}
