//! `rdc inspect` - print target table schemas

use comfy_table::Table;

use crate::error::{CliError, Result};
use rdc_ingest::config::DbCredentials;
use rdc_ingest::db;
use rdc_ingest::orchestrator::Dataset;

/// Print the column schema of the named tables (default: every target table)
pub async fn run(target_creds_file: &str, tables: &[String]) -> Result<()> {
    let creds = DbCredentials::from_file(target_creds_file)
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    let pool = db::create_pool(&creds).await?;

    let tables: Vec<String> = if tables.is_empty() {
        Dataset::ALL.iter().map(|d| d.table().to_string()).collect()
    } else {
        tables.to_vec()
    };

    for table in &tables {
        let columns = db::table_schema(&pool, table).await?;

        println!();
        println!("Schema of table {}:", table);

        if columns.is_empty() {
            println!("  (table does not exist)");
            continue;
        }

        let mut output = Table::new();
        output.set_header(vec!["column", "type"]);
        for column in &columns {
            output.add_row(vec![column.column_name.clone(), column.type_display()]);
        }
        println!("{output}");
    }

    Ok(())
}
