//! Zone containment engine.
//!
//! Decodes road records into point, path and ring shapes, tests a
//! location against them and reduces the matches of the prohibited and
//! restricted scenarios into a single severity.

mod assess;
mod collection;
mod decode;
mod index;
mod road;
mod shape;
mod snapshot;

pub use assess::{assess, classify_severity, Assessment};
pub use collection::{build_shape_collection, ShapeCollection, ZoneShape, MAX_UNDRAWN_TOKENS};
pub use decode::decode_points;
pub use index::{IndexedRoad, ZoneIndex};
pub use road::{road_shape, scenario_shapes, RejectedRoad};
pub use shape::{is_contained, RoadShape};
pub use snapshot::{ZoneSnapshot, ZoneView};
