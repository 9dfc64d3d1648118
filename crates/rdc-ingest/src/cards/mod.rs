//! Cards dataset: remote card details PDF → dim_card_details
//!
//! The PDF carries one table across all pages with the columns
//! card_number, expiry_date, card_provider, date_payment_confirmed.

pub mod clean;
pub mod models;
pub mod pdf;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::http::fetch_bytes;
use crate::orchestrator::{EtlContext, PipelineStats};

/// Run the cards pipeline: fetch → parse → clean → load
pub async fn run(ctx: &EtlContext) -> Result<PipelineStats> {
    let url = &ctx.config.endpoints.card_pdf_url;

    info!("Phase 1: Downloading card details PDF");
    let bytes = fetch_bytes(&ctx.http, url)
        .await
        .context("Failed to download card details PDF")?;

    info!("Phase 2: Extracting card records from {} PDF bytes", bytes.len());
    let text = pdf::extract_text(&bytes).context("Failed to extract text from the PDF")?;
    let (raw, skipped_lines) = pdf::parse_card_text(&text);
    let extracted = raw.len();
    info!(records = extracted, skipped_lines, "Parsed card records from PDF text");

    info!("Phase 3: Cleaning {} card records", extracted);
    let cards = clean::clean_all(raw);

    info!("Phase 4: Loading {} records into {}", cards.len(), storage::TABLE);
    let loaded = storage::replace(&ctx.target_db, &cards)
        .await
        .context("Failed to load dim_card_details")?;

    Ok(PipelineStats {
        extracted,
        dropped: extracted - cards.len(),
        loaded,
    })
}
