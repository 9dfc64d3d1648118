//! Products dataset: products CSV on object storage → dim_products
//!
//! The CSV carries a leading unnamed index column (ignored), GBP price
//! strings, and weight strings in mixed units that normalise to kilograms.

pub mod clean;
pub mod fetch;
pub mod models;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::orchestrator::{EtlContext, PipelineStats};
use crate::s3::S3Address;

/// Run the products pipeline: fetch → clean → load
pub async fn run(ctx: &EtlContext) -> Result<PipelineStats> {
    let address: S3Address = ctx.config.endpoints.products_csv_address.parse()?;

    info!("Phase 1: Downloading {}", address);
    let bytes = ctx
        .object_store
        .download(&address)
        .await
        .context("Failed to download products CSV")?;

    let raw = fetch::parse_csv(&bytes).context("Failed to parse products CSV")?;
    let extracted = raw.len();

    info!("Phase 2: Cleaning {} product records", extracted);
    let products = clean::clean_all(raw);

    info!("Phase 3: Loading {} records into {}", products.len(), storage::TABLE);
    let loaded = storage::replace(&ctx.target_db, &products)
        .await
        .context("Failed to load dim_products")?;

    Ok(PipelineStats {
        extracted,
        dropped: extracted - products.len(),
        loaded,
    })
}
