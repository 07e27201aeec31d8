use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Scenario, Tier};

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// Scenario payload files; a missing entry means that tier is not loaded
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScenarioConfig {
    pub prohibited: Option<PathBuf>,
    pub restricted: Option<PathBuf>,
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

impl Config {
    /// Load a TOML config. Relative scenario paths are resolved against
    /// the config file's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        if let Some(base) = path.parent() {
            config.scenarios.prohibited = config.scenarios.prohibited.map(|p| base.join(p));
            config.scenarios.restricted = config.scenarios.restricted.map(|p| base.join(p));
        }

        Ok(config)
    }
}

impl ScenarioConfig {
    pub fn path(&self, tier: Tier) -> Option<&Path> {
        match tier {
            Tier::Prohibited => self.prohibited.as_deref(),
            Tier::Restricted => self.restricted.as_deref(),
        }
    }

    /// Read the configured scenario of `tier`, if any
    pub fn load(&self, tier: Tier) -> Result<Option<Scenario>> {
        let Some(path) = self.path(tier) else {
            info!("No {} scenario configured", tier);
            return Ok(None);
        };

        let scenario = Scenario::load_from_file(path)?;
        info!(
            "Loaded {} scenario '{}' with {} roads from {}",
            tier,
            scenario.id,
            scenario.roads_to_be_attributed.len(),
            path.display()
        );
        Ok(Some(scenario))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.listen, DEFAULT_LISTEN);
        assert!(config.scenarios.prohibited.is_none());
        assert!(config.scenarios.restricted.is_none());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let scenario_path = dir.path().join("prohibited.json");
        fs::write(
            &scenario_path,
            r#"{"id": "p", "roadsToBeAttributed": [{"description": "d", "points": "1,2"}]}"#,
        )
        .unwrap();

        let config_path = dir.path().join("roadzone.toml");
        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            "[server]\nlisten = \"127.0.0.1:8080\"\n\n[scenarios]\nprohibited = \"prohibited.json\""
        )
        .unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8080");
        assert_eq!(config.scenarios.path(Tier::Prohibited), Some(scenario_path.as_path()));

        let prohibited = config.scenarios.load(Tier::Prohibited).unwrap().unwrap();
        assert_eq!(prohibited.id, "p");
        assert!(config.scenarios.load(Tier::Restricted).unwrap().is_none());
    }

    #[test]
    fn test_missing_scenario_file_fails() {
        let config = ScenarioConfig {
            prohibited: Some(PathBuf::from("/nonexistent/p.json")),
            restricted: None,
        };
        assert!(config.load(Tier::Prohibited).is_err());
    }
}
