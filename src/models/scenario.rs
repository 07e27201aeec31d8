//! Custom road attribute scenarios.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Severity tier a scenario stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Prohibited,
    Restricted,
}

impl Tier {
    /// Tiers in evaluation order (prohibited first)
    pub fn all() -> &'static [Tier] {
        &[Tier::Prohibited, Tier::Restricted]
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Prohibited => write!(f, "prohibited"),
            Tier::Restricted => write!(f, "restricted"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prohibited" => Ok(Tier::Prohibited),
            "restricted" => Ok(Tier::Restricted),
            other => anyhow::bail!("unknown tier '{}'", other),
        }
    }
}

/// One named road feature of a scenario.
///
/// `points` is the sole geometry source: interleaved `lat,lon,lat,lon,...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadRecord {
    pub description: String,
    pub points: String,
}

impl RoadRecord {
    pub fn new(description: impl Into<String>, points: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            points: points.into(),
        }
    }

    /// Number of raw comma-separated tokens, valid or not
    pub fn token_count(&self) -> usize {
        self.points.split(',').count()
    }
}

/// A named collection of road records for one severity tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub roads_to_be_attributed: Vec<RoadRecord>,
}

impl Scenario {
    pub fn new(id: impl Into<String>, roads: Vec<RoadRecord>) -> Self {
        Self {
            id: id.into(),
            roads_to_be_attributed: roads,
        }
    }

    /// Load a scenario payload from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))?;
        Ok(scenario)
    }
}
