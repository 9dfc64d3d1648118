//! One-shot ETL orchestrator
//!
//! Runs the dataset pipelines in a fixed order, strictly sequentially. A
//! failed pipeline is logged and reported in the run summary; the next
//! dataset still runs. There is no retry and no scheduling.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{error, info};

use crate::config::EtlConfig;
use crate::s3::ObjectStore;
use crate::{cards, dates, orders, products, stores, users};

/// Shared handles for one ETL run
pub struct EtlContext {
    pub config: EtlConfig,
    /// Legacy source database (users, orders)
    pub source_db: PgPool,
    /// Target warehouse
    pub target_db: PgPool,
    /// Shared HTTP client (store API, PDF, JSON document)
    pub http: reqwest::Client,
    /// Object storage client (products CSV)
    pub object_store: ObjectStore,
}

impl EtlContext {
    /// Connect every handle the run needs
    pub async fn connect(config: EtlConfig) -> Result<Self> {
        let source_db = crate::db::create_pool(&config.source_creds)
            .await
            .context("Failed to connect to the source database")?;

        let target_db = crate::db::create_pool(&config.target_creds)
            .await
            .context("Failed to connect to the target database")?;

        let http = crate::http::build_client(config.endpoints.timeout_secs)?;
        let object_store = ObjectStore::from_env().await;

        Ok(Self {
            config,
            source_db,
            target_db,
            http,
            object_store,
        })
    }
}

/// The datasets an ETL run covers, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Users,
    Orders,
    Stores,
    Cards,
    Products,
    Dates,
}

impl Dataset {
    /// Every dataset, in run order
    pub const ALL: [Dataset; 6] = [
        Dataset::Users,
        Dataset::Orders,
        Dataset::Stores,
        Dataset::Cards,
        Dataset::Products,
        Dataset::Dates,
    ];

    /// Target table this dataset loads into
    pub fn table(self) -> &'static str {
        match self {
            Dataset::Users => users::storage::TABLE,
            Dataset::Orders => orders::storage::TABLE,
            Dataset::Stores => stores::storage::TABLE,
            Dataset::Cards => cards::storage::TABLE,
            Dataset::Products => products::storage::TABLE,
            Dataset::Dates => dates::storage::TABLE,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dataset::Users => "users",
            Dataset::Orders => "orders",
            Dataset::Stores => "stores",
            Dataset::Cards => "cards",
            Dataset::Products => "products",
            Dataset::Dates => "dates",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Dataset {
    type Err = rdc_common::EtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "users" => Ok(Dataset::Users),
            "orders" => Ok(Dataset::Orders),
            "stores" => Ok(Dataset::Stores),
            "cards" => Ok(Dataset::Cards),
            "products" => Ok(Dataset::Products),
            "dates" => Ok(Dataset::Dates),
            other => Err(rdc_common::EtlError::DatasetNotFound(other.to_string())),
        }
    }
}

/// Counters for one dataset pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Records pulled out of the source
    pub extracted: usize,
    /// Records dropped by the cleaning rules
    pub dropped: usize,
    /// Records written to the target table
    pub loaded: u64,
}

/// Result of one dataset pipeline within a run
#[derive(Debug, Clone)]
pub struct DatasetOutcome {
    pub dataset: Dataset,
    pub stats: Option<PipelineStats>,
    pub error: Option<String>,
}

impl DatasetOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// One-line summary for the run report
    pub fn summary(&self) -> String {
        match (&self.stats, &self.error) {
            (Some(stats), None) => format!(
                "{} → {}: {} extracted, {} dropped, {} loaded",
                self.dataset,
                self.dataset.table(),
                stats.extracted,
                stats.dropped,
                stats.loaded
            ),
            (_, Some(error)) => format!("{}: FAILED - {}", self.dataset, error),
            (None, None) => format!("{}: no outcome recorded", self.dataset),
        }
    }
}

/// Run one dataset pipeline
pub async fn run_dataset(ctx: &EtlContext, dataset: Dataset) -> Result<PipelineStats> {
    info!(dataset = %dataset, "Starting pipeline");

    let stats = match dataset {
        Dataset::Users => users::run(ctx).await?,
        Dataset::Orders => orders::run(ctx).await?,
        Dataset::Stores => stores::run(ctx).await?,
        Dataset::Cards => cards::run(ctx).await?,
        Dataset::Products => products::run(ctx).await?,
        Dataset::Dates => dates::run(ctx).await?,
    };

    info!(
        dataset = %dataset,
        extracted = stats.extracted,
        dropped = stats.dropped,
        loaded = stats.loaded,
        "Pipeline completed"
    );

    Ok(stats)
}

/// Run every dataset pipeline in order, isolating failures per dataset
pub async fn run_all(ctx: &EtlContext, only: Option<Dataset>) -> Vec<DatasetOutcome> {
    let datasets: Vec<Dataset> = match only {
        Some(dataset) => vec![dataset],
        None => Dataset::ALL.to_vec(),
    };

    let mut outcomes = Vec::with_capacity(datasets.len());

    for dataset in datasets {
        let outcome = match run_dataset(ctx, dataset).await {
            Ok(stats) => DatasetOutcome {
                dataset,
                stats: Some(stats),
                error: None,
            },
            Err(e) => {
                error!(dataset = %dataset, error = %format!("{:#}", e), "Pipeline failed");
                DatasetOutcome {
                    dataset,
                    stats: None,
                    error: Some(format!("{:#}", e)),
                }
            }
        };

        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_str() {
        assert_eq!("users".parse::<Dataset>().unwrap(), Dataset::Users);
        assert_eq!("Stores".parse::<Dataset>().unwrap(), Dataset::Stores);
        assert!("widgets".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_dataset_tables() {
        assert_eq!(Dataset::Users.table(), "dim_users");
        assert_eq!(Dataset::Orders.table(), "orders_table");
        assert_eq!(Dataset::Cards.table(), "dim_card_details");
        assert_eq!(Dataset::Dates.table(), "dim_date_times");
    }

    #[test]
    fn test_outcome_summary() {
        let outcome = DatasetOutcome {
            dataset: Dataset::Products,
            stats: Some(PipelineStats {
                extracted: 1853,
                dropped: 7,
                loaded: 1846,
            }),
            error: None,
        };
        assert_eq!(
            outcome.summary(),
            "products → dim_products: 1853 extracted, 7 dropped, 1846 loaded"
        );
        assert!(outcome.is_success());

        let outcome = DatasetOutcome {
            dataset: Dataset::Cards,
            stats: None,
            error: Some("GET ... returned 403".to_string()),
        };
        assert!(!outcome.is_success());
        assert!(outcome.summary().contains("FAILED"));
    }
}
