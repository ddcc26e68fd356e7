//! Application setup and initialization
//!
//! Initialization logic lives here rather than in main.rs so that integration
//! tests can assemble the same router against temporary storage.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidmark_core::Config;
use vidmark_storage::LocalSlotStore;

/// Initialize the entire application: telemetry, storage, routes.
pub async fn initialize_app(config: Config) -> Result<(AppState, axum::Router)> {
    crate::telemetry::init_telemetry();

    // Fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    let store = LocalSlotStore::new(config.video_storage_path())
        .await
        .context("Failed to initialize video storage")?;

    let state = AppState::new(config.clone(), Arc::new(store));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
