//! Query server for zone lookups.
//!
//! Loads the prohibited and restricted scenarios once at startup and
//! answers severity and shape queries for picked locations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadzone::config::Config;
use roadzone::models::{Scenario, Tier};
use roadzone::zone::ZoneIndex;

mod handlers;
use handlers::{assess_handler, health_handler, zones_handler};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Zone lookup query server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Prohibited scenario JSON (overrides the config file)
    #[arg(long)]
    prohibited: Option<PathBuf>,

    /// Restricted scenario JSON (overrides the config file)
    #[arg(long)]
    restricted: Option<PathBuf>,
}

/// Application state shared across handlers
pub struct AppState {
    pub prohibited: Option<Scenario>,
    pub restricted: Option<Scenario>,
    pub index: ZoneIndex,
}

impl AppState {
    pub fn scenario(&self, tier: Tier) -> Option<&Scenario> {
        match tier {
            Tier::Prohibited => self.prohibited.as_ref(),
            Tier::Restricted => self.restricted.as_ref(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if args.prohibited.is_some() {
        config.scenarios.prohibited = args.prohibited;
    }
    if args.restricted.is_some() {
        config.scenarios.restricted = args.restricted;
    }

    info!("Roadzone Query Server");

    let prohibited = config.scenarios.load(Tier::Prohibited)?;
    let restricted = config.scenarios.load(Tier::Restricted)?;
    if prohibited.is_none() && restricted.is_none() {
        warn!("No scenario loaded; every location is reported as prohibited");
    }
    let index = ZoneIndex::build(prohibited.as_ref(), restricted.as_ref());

    let state = Arc::new(AppState {
        prohibited,
        restricted,
        index,
    });

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/assess", get(assess_handler))
        .route("/v1/zones", get(zones_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

