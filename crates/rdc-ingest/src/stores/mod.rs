//! Stores dataset: store details REST API → dim_store_details
//!
//! The API is paginated by store number: one endpoint reports how many
//! stores exist, a second returns one store per call. A failed call for an
//! individual store is logged and skipped; the pipeline carries on.

pub mod api;
pub mod clean;
pub mod models;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::orchestrator::{EtlContext, PipelineStats};

/// Run the stores pipeline: fetch → clean → load
pub async fn run(ctx: &EtlContext) -> Result<PipelineStats> {
    let client = api::StoreApiClient::new(
        ctx.http.clone(),
        ctx.config.endpoints.store_api_base.clone(),
        ctx.config.api_key.clone(),
    );

    info!("Phase 1: Retrieving store details from the API");
    let raw = client
        .retrieve_all()
        .await
        .context("Failed to retrieve store details")?;
    let extracted = raw.len();

    info!("Phase 2: Cleaning {} store records", extracted);
    let stores = clean::clean_all(raw);

    info!("Phase 3: Loading {} records into {}", stores.len(), storage::TABLE);
    let loaded = storage::replace(&ctx.target_db, &stores)
        .await
        .context("Failed to load dim_store_details")?;

    Ok(PipelineStats {
        extracted,
        dropped: extracted - stores.len(),
        loaded,
    })
}
