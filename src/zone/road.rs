//! Turning road records into shapes, and reporting the ones that fail.

use serde::{Serialize, Serializer};
use tracing::warn;

use super::{decode_points, RoadShape};
use crate::error::ZoneError;
use crate::models::{RoadRecord, Scenario};

/// A road record excluded from rendering and containment tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRoad {
    /// Id of the scenario the record belongs to
    pub scenario_id: String,
    /// Position of the record in `roadsToBeAttributed`
    pub index: usize,
    pub description: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: ZoneError,
}

impl RejectedRoad {
    pub fn new(scenario: &Scenario, index: usize, error: ZoneError) -> Self {
        let description = scenario
            .roads_to_be_attributed
            .get(index)
            .map(|r| r.description.clone())
            .unwrap_or_default();

        warn!(
            "Skipping road {} ({:?}) of scenario '{}': {}",
            index, description, scenario.id, error
        );

        Self {
            scenario_id: scenario.id.clone(),
            index,
            description,
            error,
        }
    }
}

/// Decode and classify a road record's geometry
pub fn road_shape(record: &RoadRecord) -> Result<RoadShape, ZoneError> {
    RoadShape::classify(decode_points(&record.points)?)
}

/// Shapes of every road of `scenario`, in order, with failures split out
pub fn scenario_shapes(
    scenario: &Scenario,
) -> (Vec<(usize, &RoadRecord, RoadShape)>, Vec<RejectedRoad>) {
    let mut shapes = Vec::with_capacity(scenario.roads_to_be_attributed.len());
    let mut rejected = Vec::new();

    for (index, record) in scenario.roads_to_be_attributed.iter().enumerate() {
        match road_shape(record) {
            Ok(shape) => shapes.push((index, record, shape)),
            Err(e) => rejected.push(RejectedRoad::new(scenario, index, e)),
        }
    }

    (shapes, rejected)
}

fn serialize_error<S: Serializer>(error: &ZoneError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
