//! Severity classification of a point against the prohibited and
//! restricted scenarios.

use geo::Coord;
use serde::Serialize;
use tracing::debug;

use super::road::{scenario_shapes, RejectedRoad};
use crate::models::{RoadRecord, Scenario, Severity};

/// Result of evaluating one point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub severity: Severity,
    /// Descriptions of every matching road, prohibited roads first
    pub descriptions: Vec<String>,
    /// Roads that could not be evaluated
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedRoad>,
}

/// Evaluate `point` against both scenarios; either may be not yet loaded.
pub fn assess(
    point: Coord<f64>,
    prohibited: Option<&Scenario>,
    restricted: Option<&Scenario>,
) -> Assessment {
    let mut rejected = Vec::new();

    let prohibited_hits = matching_roads(prohibited, point, &mut rejected);
    let restricted_hits = matching_roads(restricted, point, &mut rejected);

    let severity = classify_severity(
        !prohibited_hits.is_empty(),
        !restricted_hits.is_empty(),
        prohibited.is_some() || restricted.is_some(),
    );

    let descriptions: Vec<String> = prohibited_hits
        .iter()
        .chain(restricted_hits.iter())
        .map(|r| r.description.clone())
        .collect();

    debug!(
        "Assessment at ({}, {}): {} with {} matching roads",
        point.x,
        point.y,
        severity,
        descriptions.len()
    );

    Assessment {
        severity,
        descriptions,
        rejected,
    }
}

/// Reduce per-tier matches to a severity.
///
/// Prohibited matches win over restricted ones. With neither scenario
/// loaded the point is reported as prohibited.
pub fn classify_severity(prohibited_hit: bool, restricted_hit: bool, any_loaded: bool) -> Severity {
    if prohibited_hit {
        Severity::Prohibited
    } else if restricted_hit {
        Severity::Restricted
    } else if !any_loaded {
        Severity::Prohibited
    } else {
        Severity::None
    }
}

fn matching_roads<'a>(
    scenario: Option<&'a Scenario>,
    point: Coord<f64>,
    rejected: &mut Vec<RejectedRoad>,
) -> Vec<&'a RoadRecord> {
    let Some(scenario) = scenario else {
        return Vec::new();
    };

    let (shapes, failed) = scenario_shapes(scenario);
    rejected.extend(failed);

    shapes
        .into_iter()
        .filter(|(_, _, shape)| shape.contains(point))
        .map(|(_, record, _)| record)
        .collect()
}
