//! Whole-state evaluation: one immutable snapshot in, everything the
//! renderer needs out.

use super::{assess, build_shape_collection, Assessment, ShapeCollection};
use crate::models::{Location, Scenario, Tier};

/// Current inputs: the picked location and both scenarios, any of which
/// may still be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSnapshot {
    pub location: Option<Location>,
    pub prohibited: Option<Scenario>,
    pub restricted: Option<Scenario>,
}

/// Everything derived from a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneView {
    /// `None` when the prohibited scenario is not loaded
    pub prohibited_shapes: Option<ShapeCollection>,
    /// `None` when the restricted scenario is not loaded
    pub restricted_shapes: Option<ShapeCollection>,
    /// `None` until a location is picked
    pub assessment: Option<Assessment>,
}

impl ZoneSnapshot {
    pub fn new(
        location: Option<Location>,
        prohibited: Option<Scenario>,
        restricted: Option<Scenario>,
    ) -> Self {
        Self {
            location,
            prohibited,
            restricted,
        }
    }

    /// Replace the location, keeping the scenarios
    pub fn with_location(&self, location: Option<Location>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn scenario(&self, tier: Tier) -> Option<&Scenario> {
        match tier {
            Tier::Prohibited => self.prohibited.as_ref(),
            Tier::Restricted => self.restricted.as_ref(),
        }
    }

    /// Recompute shapes and classification from scratch
    pub fn evaluate(&self) -> ZoneView {
        let location_present = self.location.is_some();

        ZoneView {
            prohibited_shapes: self
                .prohibited
                .as_ref()
                .map(|s| build_shape_collection(s, location_present)),
            restricted_shapes: self
                .restricted
                .as_ref()
                .map(|s| build_shape_collection(s, location_present)),
            assessment: self.location.map(|location| {
                assess(
                    location.effective_point(),
                    self.prohibited.as_ref(),
                    self.restricted.as_ref(),
                )
            }),
        }
    }
}
