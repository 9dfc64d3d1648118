//! Client for the store details REST API

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::models::RawStore;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Response of the `number_stores` endpoint
#[derive(Debug, Deserialize)]
struct NumberOfStores {
    number_stores: u32,
}

/// Client for the store details API
pub struct StoreApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StoreApiClient {
    /// Create a new client
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Number of stores known to the API
    pub async fn number_of_stores(&self) -> Result<u32> {
        let url = self.url("number_stores");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;

        let body: NumberOfStores = response
            .json()
            .await
            .context("number_stores response is not the expected JSON")?;

        Ok(body.number_stores)
    }

    /// Details of one store
    pub async fn store_details(&self, store_number: u32) -> Result<RawStore> {
        let url = self.url(&format!("store_details/{}", store_number));

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;

        response
            .json()
            .await
            .with_context(|| format!("Store {} response is not the expected JSON", store_number))
    }

    /// Retrieve every store, one call per store number.
    ///
    /// A failed call is logged and that store is skipped; the loop carries
    /// on with the next number.
    pub async fn retrieve_all(&self) -> Result<Vec<RawStore>> {
        let total = self.number_of_stores().await?;
        tracing::info!(stores = total, "Store count reported by the API");

        let progress = ProgressBar::new(u64::from(total));
        let mut stores = Vec::with_capacity(total as usize);

        for store_number in 1..=total {
            match self.store_details(store_number).await {
                Ok(store) => stores.push(store),
                Err(e) => {
                    warn!(store_number, error = %e, "Failed to retrieve store, skipping");
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();

        Ok(stores)
    }
}
