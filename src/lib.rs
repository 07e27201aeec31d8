//! Roadzone - decide whether an address falls in a custom road attribute zone
//!
//! This library provides the zone containment engine shared by the query
//! server and the check CLI.

pub mod config;
pub mod error;
pub mod models;
pub mod zone;

pub use error::ZoneError;
pub use models::{GeoPosition, Location, RoadRecord, Scenario, Severity, Tier};
