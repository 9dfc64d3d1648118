//! Dates dataset: date details JSON document → dim_date_times
//!
//! The document historically ships in column-major form (one map per
//! column, keyed by row index); row-major arrays are accepted too.

pub mod clean;
pub mod fetch;
pub mod models;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::http::fetch_json;
use crate::orchestrator::{EtlContext, PipelineStats};

/// Run the dates pipeline: fetch → clean → load
pub async fn run(ctx: &EtlContext) -> Result<PipelineStats> {
    let url = &ctx.config.endpoints.date_details_url;

    info!("Phase 1: Downloading date details JSON");
    let value = fetch_json(&ctx.http, url)
        .await
        .context("Failed to download date details")?;

    let raw = fetch::rows_from_json(value).context("Failed to normalise date details JSON")?;
    let extracted = raw.len();

    info!("Phase 2: Cleaning {} date records", extracted);
    let dates = clean::clean_all(raw);

    info!("Phase 3: Loading {} records into {}", dates.len(), storage::TABLE);
    let loaded = storage::replace(&ctx.target_db, &dates)
        .await
        .context("Failed to load dim_date_times")?;

    Ok(PipelineStats {
        extracted,
        dropped: extracted - dates.len(),
        loaded,
    })
}
