//! Spatial index for fast zone lookups.

use geo::Coord;
use rstar::{RTree, RTreeObject, AABB};
use tracing::{debug, info};

use super::assess::{classify_severity, Assessment};
use super::road::{scenario_shapes, RejectedRoad};
use super::RoadShape;
use crate::models::{Scenario, Tier};

/// Wrapper for R-tree indexing of road shapes
pub struct IndexedRoad {
    pub tier: Tier,
    /// Position within the scenario's road list
    pub index: usize,
    pub description: String,
    pub shape: RoadShape,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedRoad {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedRoad {
    pub fn new(tier: Tier, index: usize, description: String, shape: RoadShape) -> Option<Self> {
        let rect = shape.bounding_rect()?;
        Some(Self {
            tier,
            index,
            description,
            shape,
            envelope: AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
        })
    }
}

/// Road shapes of both scenarios behind an R-tree bounding-box pre-filter.
///
/// Holds decoded geometry only; every lookup recomputes containment.
pub struct ZoneIndex {
    tree: RTree<IndexedRoad>,
    loaded: Vec<Tier>,
    rejected: Vec<RejectedRoad>,
}

impl ZoneIndex {
    /// Build the index from whichever scenarios are loaded
    pub fn build(prohibited: Option<&Scenario>, restricted: Option<&Scenario>) -> Self {
        let mut indexed = Vec::new();
        let mut loaded = Vec::new();
        let mut rejected = Vec::new();

        for (tier, scenario) in [(Tier::Prohibited, prohibited), (Tier::Restricted, restricted)] {
            let Some(scenario) = scenario else {
                continue;
            };
            loaded.push(tier);

            let (shapes, failed) = scenario_shapes(scenario);
            rejected.extend(failed);

            info!(
                "Indexing {} scenario '{}' with {} roads",
                tier,
                scenario.id,
                shapes.len()
            );

            indexed.extend(shapes.into_iter().filter_map(|(index, record, shape)| {
                IndexedRoad::new(tier, index, record.description.clone(), shape)
            }));
        }

        let tree = RTree::bulk_load(indexed);
        info!("Zone index built with {} entries", tree.size());

        Self {
            tree,
            loaded,
            rejected,
        }
    }

    /// All roads containing `point`, prohibited first, then in scenario order
    pub fn lookup(&self, point: Coord<f64>) -> Vec<&IndexedRoad> {
        let query_envelope = AABB::from_point([point.x, point.y]);

        let mut hits: Vec<&IndexedRoad> = self
            .tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|road| road.shape.contains(point))
            .collect();
        hits.sort_by_key(|road| (road.tier, road.index));

        debug!(
            "Zone lookup at ({}, {}): {} matching roads",
            point.x,
            point.y,
            hits.len()
        );

        hits
    }

    /// Same result as [`super::assess`] on the scenarios this index was built from
    pub fn assess(&self, point: Coord<f64>) -> Assessment {
        let hits = self.lookup(point);

        let severity = classify_severity(
            hits.iter().any(|r| r.tier == Tier::Prohibited),
            hits.iter().any(|r| r.tier == Tier::Restricted),
            !self.loaded.is_empty(),
        );

        Assessment {
            severity,
            descriptions: hits.iter().map(|r| r.description.clone()).collect(),
            rejected: self.rejected.clone(),
        }
    }

    pub fn is_loaded(&self, tier: Tier) -> bool {
        self.loaded.contains(&tier)
    }

    /// Roads excluded while building
    pub fn rejected(&self) -> &[RejectedRoad] {
        &self.rejected
    }

    /// Get total number of indexed roads
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
