//! Users dataset: legacy_users (source Postgres) → dim_users
//!
//! Extraction casts every column to text in SQL so the pipeline does not
//! depend on the legacy table's column types.

pub mod clean;
pub mod fetch;
pub mod models;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::orchestrator::{EtlContext, PipelineStats};

/// Run the users pipeline: fetch → clean → load
pub async fn run(ctx: &EtlContext) -> Result<PipelineStats> {
    info!("Phase 1: Extracting {}", ctx.config.tables.users);
    let raw = fetch::fetch(&ctx.source_db, &ctx.config.tables.users)
        .await
        .context("Failed to extract legacy users")?;
    let extracted = raw.len();

    info!("Phase 2: Cleaning {} user records", extracted);
    let users = clean::clean_all(raw);

    info!("Phase 3: Loading {} records into {}", users.len(), storage::TABLE);
    let loaded = storage::replace(&ctx.target_db, &users)
        .await
        .context("Failed to load dim_users")?;

    Ok(PipelineStats {
        extracted,
        dropped: extracted - users.len(),
        loaded,
    })
}
