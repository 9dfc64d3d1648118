//! RDC CLI - Main entry point

use clap::Parser;
use rdc_cli::{Cli, Commands};
use rdc_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("rdc".to_string())
            .build()
    } else {
        LogConfig::builder()
            .level(LogLevel::Info)
            .output(LogOutput::Console)
            .log_file_prefix("rdc".to_string())
            .build()
    };

    // Environment variables take precedence over the flag defaults
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    // The CLI still works if logging cannot initialize
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> rdc_cli::Result<()> {
    match &cli.command {
        Commands::Run { only } => {
            rdc_cli::commands::run::run(
                &cli.config,
                &cli.source_creds,
                &cli.target_creds,
                only.as_deref(),
            )
            .await
        }

        Commands::Tables { target } => {
            rdc_cli::commands::tables::run(&cli.source_creds, &cli.target_creds, *target).await
        }

        Commands::Inspect { tables } => {
            rdc_cli::commands::inspect::run(&cli.target_creds, tables).await
        }

        Commands::Drop { tables, yes } => {
            rdc_cli::commands::drop::run(&cli.target_creds, tables, *yes).await
        }
    }
}
