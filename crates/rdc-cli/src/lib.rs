//! RDC CLI Library
//!
//! Command-line interface for the retail data centralisation ETL.
//!
//! # Overview
//!
//! - **One-shot run**: fetch, clean, and load every dataset (`rdc run`)
//! - **Table listing**: list source or target tables (`rdc tables`)
//! - **Schema inspection**: print target table schemas (`rdc inspect`)
//! - **Table removal**: drop target tables (`rdc drop`)

pub mod commands;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use rdc_ingest::config::{
    DEFAULT_CONFIG_FILE, DEFAULT_SOURCE_CREDS_FILE, DEFAULT_TARGET_CREDS_FILE,
};

/// RDC - Retail Data Centralisation ETL
#[derive(Parser, Debug)]
#[command(name = "rdc")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Main config file (API key, endpoint overrides)
    #[arg(long, env = "RDC_CONFIG", default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: String,

    /// Source database credentials file
    #[arg(long, env = "RDC_SOURCE_CREDS", default_value = DEFAULT_SOURCE_CREDS_FILE, global = true)]
    pub source_creds: String,

    /// Target database credentials file
    #[arg(long, env = "RDC_TARGET_CREDS", default_value = DEFAULT_TARGET_CREDS_FILE, global = true)]
    pub target_creds: String,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the one-shot ETL across all datasets
    Run {
        /// Run a single dataset (users, orders, stores, cards, products, dates)
        #[arg(long)]
        only: Option<String>,
    },

    /// List tables in the source (default) or target database
    Tables {
        /// List the target warehouse instead of the source
        #[arg(short, long)]
        target: bool,
    },

    /// Print target table schemas
    Inspect {
        /// Tables to inspect (defaults to every target table)
        tables: Vec<String>,
    },

    /// Drop target tables
    Drop {
        /// Tables to drop
        #[arg(required = true)]
        tables: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
