//! Renderable polygon collections per scenario.

use geo::Polygon;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use tracing::debug;

use super::decode_points;
use super::road::RejectedRoad;
use super::shape::close_ring;
use crate::models::Scenario;

/// Records with this many raw tokens or fewer (3 coordinate pairs) are
/// points or lines and are never drawn.
pub const MAX_UNDRAWN_TOKENS: usize = 6;

/// One drawable zone polygon
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneShape {
    pub description: String,
    pub polygon: Polygon<f64>,
}

/// Polygons of one scenario, ready for map display
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCollection {
    /// Scenario id
    pub id: String,
    pub shapes: Vec<ZoneShape>,
    pub rejected: Vec<RejectedRoad>,
}

impl ShapeCollection {
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            shapes: Vec::new(),
            rejected: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Render as a GeoJSON FeatureCollection.
    ///
    /// Every feature carries a `description` property; the scenario id is
    /// set as the collection's `id` member.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .shapes
            .iter()
            .map(|shape| {
                let mut properties = JsonObject::new();
                properties.insert(
                    "description".to_string(),
                    JsonValue::from(shape.description.clone()),
                );
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(geojson::Value::from(&shape.polygon))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        let mut members = JsonObject::new();
        members.insert("id".to_string(), JsonValue::from(self.id.clone()));

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(members),
        }
    }
}

/// Build the polygon layer of `scenario`.
///
/// Nothing is drawn until a location has been picked, so the collection
/// is empty whenever `location_present` is false.
pub fn build_shape_collection(scenario: &Scenario, location_present: bool) -> ShapeCollection {
    if !location_present {
        return ShapeCollection::empty(&scenario.id);
    }

    let mut collection = ShapeCollection::empty(&scenario.id);

    for (index, record) in scenario.roads_to_be_attributed.iter().enumerate() {
        if record.token_count() <= MAX_UNDRAWN_TOKENS {
            continue;
        }

        match decode_points(&record.points) {
            Ok(coords) => collection.shapes.push(ZoneShape {
                description: record.description.clone(),
                polygon: close_ring(coords),
            }),
            Err(e) => collection
                .rejected
                .push(RejectedRoad::new(scenario, index, e)),
        }
    }

    debug!(
        "Scenario '{}': {} polygons, {} rejected",
        scenario.id,
        collection.shapes.len(),
        collection.rejected.len()
    );

    collection
}
