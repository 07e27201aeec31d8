//! HTTP handlers for zone queries.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use roadzone::models::{GeoPosition, Location, Severity, Tier};
use roadzone::zone::{build_shape_collection, RejectedRoad};

use crate::AppState;

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        prohibited_loaded: state.prohibited.is_some(),
        restricted_loaded: state.restricted.is_some(),
        indexed_roads: state.index.len(),
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    prohibited_loaded: bool,
    restricted_loaded: bool,
    indexed_roads: usize,
}

/// Classify a picked location
pub async fn assess_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AssessQueryParams>,
) -> Result<Json<AssessResponse>, (StatusCode, String)> {
    let location = params
        .location()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let assessment = state.index.assess(location.effective_point());

    Ok(Json(AssessResponse {
        severity: assessment.severity,
        label: assessment.severity.label(),
        descriptions: assessment.descriptions,
        rejected: assessment.rejected,
    }))
}

/// Polygon layer of one scenario as GeoJSON
pub async fn zones_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ZonesQueryParams>,
) -> Result<Json<FeatureCollection>, (StatusCode, String)> {
    let scenario = state.scenario(params.tier).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("{} scenario is not loaded", params.tier),
        )
    })?;

    let location_present = params
        .location_present()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;
    let collection = build_shape_collection(scenario, location_present);

    debug!(
        "Zones for {} (location present: {}): {} polygons",
        params.tier,
        location_present,
        collection.len()
    );

    Ok(Json(collection.to_geojson()))
}

#[derive(Deserialize)]
pub struct AssessQueryParams {
    /// Reference position latitude
    #[serde(rename = "point.lat")]
    point_lat: f64,
    /// Reference position longitude
    #[serde(rename = "point.lon")]
    point_lon: f64,
    /// Road access latitude
    #[serde(rename = "access.lat")]
    access_lat: Option<f64>,
    /// Road access longitude
    #[serde(rename = "access.lon")]
    access_lon: Option<f64>,
}

impl AssessQueryParams {
    /// Build the location; a road access position needs both coordinates
    fn location(&self) -> Result<Location, String> {
        let location = Location::new(finite_position(
            "point",
            self.point_lat,
            self.point_lon,
        )?);
        match (self.access_lat, self.access_lon) {
            (Some(lat), Some(lon)) => {
                Ok(location.with_road_access(finite_position("access", lat, lon)?))
            }
            (None, None) => Ok(location),
            _ => Err("access.lat and access.lon must be given together".to_string()),
        }
    }
}

impl ZonesQueryParams {
    /// Whether a point was picked; a point needs both coordinates
    fn location_present(&self) -> Result<bool, String> {
        match (self.point_lat, self.point_lon) {
            (Some(lat), Some(lon)) => finite_position("point", lat, lon).map(|_| true),
            (None, None) => Ok(false),
            _ => Err("point.lat and point.lon must be given together".to_string()),
        }
    }
}

fn finite_position(name: &str, lat: f64, lon: f64) -> Result<GeoPosition, String> {
    let position = GeoPosition::new(lat, lon);
    if position.is_finite() {
        Ok(position)
    } else {
        Err(format!("{name}.lat and {name}.lon must be finite numbers"))
    }
}

#[derive(Deserialize)]
pub struct ZonesQueryParams {
    tier: Tier,
    /// Picked location latitude; shapes are only returned once a point is picked
    #[serde(rename = "point.lat")]
    point_lat: Option<f64>,
    #[serde(rename = "point.lon")]
    point_lon: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    severity: Severity,
    label: &'static str,
    descriptions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rejected: Vec<RejectedRoad>,
}
