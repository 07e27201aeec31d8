//! Core data models for zone lookups.

pub mod location;
pub mod scenario;
pub mod severity;

pub use location::{GeoPosition, Location};
pub use scenario::{RoadRecord, Scenario, Tier};
pub use severity::Severity;
