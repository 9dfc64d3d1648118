//! Orders dataset: orders_table (source Postgres) → orders_table
//!
//! The legacy table carries junk columns (`first_name`, `last_name`, `"1"`)
//! that are dropped at extraction time by simply not selecting them.

pub mod clean;
pub mod fetch;
pub mod models;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::orchestrator::{EtlContext, PipelineStats};

/// Run the orders pipeline: fetch → clean → load
pub async fn run(ctx: &EtlContext) -> Result<PipelineStats> {
    info!("Phase 1: Extracting {}", ctx.config.tables.orders);
    let raw = fetch::fetch(&ctx.source_db, &ctx.config.tables.orders)
        .await
        .context("Failed to extract orders")?;
    let extracted = raw.len();

    info!("Phase 2: Cleaning {} order records", extracted);
    let orders = clean::clean_all(raw);

    info!("Phase 3: Loading {} records into {}", orders.len(), storage::TABLE);
    let loaded = storage::replace(&ctx.target_db, &orders)
        .await
        .context("Failed to load orders_table")?;

    Ok(PipelineStats {
        extracted,
        dropped: extracted - orders.len(),
        loaded,
    })
}
