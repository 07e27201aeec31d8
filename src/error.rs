//! Errors raised while turning a road record into geometry.

use thiserror::Error;

/// Failure decoding or classifying a single road record.
///
/// These never abort a whole scenario: the offending record is reported
/// and skipped while its siblings are still evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// A token of the `points` string is not a finite number
    #[error("invalid coordinate token {token:?}")]
    Parse { token: String },

    /// The decoded coordinate sequence is empty
    #[error("road geometry has no coordinates")]
    MalformedGeometry,
}
