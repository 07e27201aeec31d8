//! Severity classification of a point against the loaded scenarios.

use serde::{Deserialize, Serialize};

/// Outcome of classifying a point against both scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Motorized access is prohibited
    Prohibited,
    /// Motorized access is restricted
    Restricted,
    /// No zone applies
    None,
}

impl Severity {
    /// Human-readable label for popups and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Prohibited => "Prohibited motorized access",
            Severity::Restricted => "Restricted motorized access",
            Severity::None => "No restrictions",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Prohibited => write!(f, "prohibited"),
            Severity::Restricted => write!(f, "restricted"),
            Severity::None => write!(f, "none"),
        }
    }
}
