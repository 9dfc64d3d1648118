//! Shared HTTP client for the remote sources
//!
//! One client is built per run and reused by the store API, the PDF fetch,
//! and the JSON fetch. Failures surface immediately; the run does not retry
//! (a failed dataset is reported and the next one proceeds).

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("rdc-etl/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET a URL and return the response body, failing on non-success status
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("GET {} returned {}", url, status);
    }

    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    tracing::debug!(url = %url, bytes = bytes.len(), "Fetched remote document");

    Ok(bytes.to_vec())
}

/// GET a URL and parse the response as JSON
pub async fn fetch_json(client: &Client, url: &str) -> Result<serde_json::Value> {
    let bytes = fetch_bytes(client, url).await?;

    serde_json::from_slice(&bytes).with_context(|| format!("Response from {} is not JSON", url))
}
