//! RDC Ingest Library
//!
//! One-shot ETL for the retail sales warehouse: each dataset is fetched
//! from its source, cleaned with per-source rules, and loaded into the
//! target schema by bulk table replacement.
//!
//! # Datasets
//!
//! - **users**: legacy_users (source Postgres) → dim_users
//! - **orders**: orders_table (source Postgres) → orders_table
//! - **stores**: store details REST API → dim_store_details
//! - **cards**: card details PDF → dim_card_details
//! - **products**: products CSV on object storage → dim_products
//! - **dates**: date details JSON document → dim_date_times
//!
//! # Example
//!
//! ```no_run
//! use rdc_ingest::config::EtlConfig;
//! use rdc_ingest::orchestrator::{run_all, EtlContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EtlConfig::load("config.yaml", "db_creds.yaml", "new_db_creds.yaml")?;
//!     let ctx = EtlContext::connect(config).await?;
//!
//!     for outcome in run_all(&ctx, None).await {
//!         println!("{}", outcome.summary());
//!     }
//!     Ok(())
//! }
//! ```

pub mod coerce;
pub mod config;
pub mod db;
pub mod http;
pub mod load;
pub mod orchestrator;
pub mod s3;

pub mod cards;
pub mod dates;
pub mod orders;
pub mod products;
pub mod stores;
pub mod users;

// Re-export the run entry points
pub use orchestrator::{run_all, run_dataset, Dataset, DatasetOutcome, EtlContext, PipelineStats};
