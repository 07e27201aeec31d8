//! One-shot zone check for a single location.
//!
//! Reads the scenario files, evaluates the location and prints the
//! result as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use roadzone::config::Config;
use roadzone::models::{GeoPosition, Location, Severity, Tier};
use roadzone::zone::{RejectedRoad, ZoneSnapshot};

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(about = "Check whether a location falls in a custom road attribute zone")]
struct Args {
    /// TOML config file naming the scenario files
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prohibited scenario JSON (overrides the config file)
    #[arg(long)]
    prohibited: Option<PathBuf>,

    /// Restricted scenario JSON (overrides the config file)
    #[arg(long)]
    restricted: Option<PathBuf>,

    /// Reference position latitude
    #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
    lat: f64,

    /// Reference position longitude
    #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
    lon: f64,

    /// Road access latitude
    #[arg(long, requires = "access_lon", allow_negative_numbers = true, value_parser = parse_coordinate)]
    access_lat: Option<f64>,

    /// Road access longitude
    #[arg(long, requires = "access_lat", allow_negative_numbers = true, value_parser = parse_coordinate)]
    access_lon: Option<f64>,

    /// Also print the polygon layers as GeoJSON
    #[arg(long)]
    geojson: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a coordinate, rejecting NaN and infinities
fn parse_coordinate(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{s} is not a finite coordinate"))
    }
}

#[derive(Serialize)]
struct CheckOutput {
    severity: Severity,
    label: &'static str,
    descriptions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rejected: Vec<RejectedRoad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prohibited_shapes: Option<geojson::FeatureCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    restricted_shapes: Option<geojson::FeatureCollection>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if args.prohibited.is_some() {
        config.scenarios.prohibited = args.prohibited.clone();
    }
    if args.restricted.is_some() {
        config.scenarios.restricted = args.restricted.clone();
    }

    let mut location = Location::new(GeoPosition::new(args.lat, args.lon));
    if let (Some(lat), Some(lon)) = (args.access_lat, args.access_lon) {
        location = location.with_road_access(GeoPosition::new(lat, lon));
    }

    let snapshot = ZoneSnapshot::new(
        Some(location),
        config.scenarios.load(Tier::Prohibited)?,
        config.scenarios.load(Tier::Restricted)?,
    );
    if Tier::all().iter().all(|tier| snapshot.scenario(*tier).is_none()) {
        warn!("No scenario loaded; the location is reported as prohibited");
    }

    let view = snapshot.evaluate();
    let assessment = view
        .assessment
        .context("Location was set but no assessment was produced")?;

    info!(
        "{}: {} matching roads",
        assessment.severity.label(),
        assessment.descriptions.len()
    );

    let (prohibited_shapes, restricted_shapes) = if args.geojson {
        (
            view.prohibited_shapes.map(|c| c.to_geojson()),
            view.restricted_shapes.map(|c| c.to_geojson()),
        )
    } else {
        (None, None)
    };

    let output = CheckOutput {
        severity: assessment.severity,
        label: assessment.severity.label(),
        descriptions: assessment.descriptions,
        rejected: assessment.rejected,
        prohibited_shapes,
        restricted_shapes,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
