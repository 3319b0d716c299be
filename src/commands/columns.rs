//! The `columns` command: show one table's columns as the classifier sees
//! them.

use anyhow::Result;
use clap::Args;

use crate::classify::{classify, Classification};

/// Arguments for `modelgen columns`.
#[derive(Debug, Args)]
pub struct ColumnsArgs {
    /// Table to describe; accepts a schema.table qualifier
    #[arg(long, value_name = "TABLE")]
    pub table: String,

    /// Named connection from modelgen.toml
    #[arg(long)]
    pub connection: Option<String>,

    /// Schema to introspect (defaults to public on PostgreSQL, the database name on MySQL)
    #[arg(long)]
    pub schema: Option<String>,
}

pub async fn run(args: ColumnsArgs) -> Result<()> {
    let session = super::open_session(args.connection.as_deref(), args.schema.as_deref()).await?;

    let columns = session.describe_columns(&args.table).await?;
    if columns.is_empty() {
        println!("No columns found for table '{}'.", args.table);
        return Ok(());
    }

    println!("📋 Columns of {}:\n", args.table);
    println!("{:<30} {:<25} {:<12}", "Column", "Type", "Category");
    println!("{:-<70}", "");
    for column in &columns {
        let category = match classify(column) {
            Classification::Excluded => "excluded",
            Classification::Timestamp => "timestamp",
            Classification::Fillable { date_typed: true, .. } => "date",
            Classification::Fillable { boolean_cast: true, .. } => "boolean",
            Classification::Fillable { .. } => "fillable",
        };
        println!("{:<30} {:<25} {:<12}", column.name, column.raw_type, category);
    }
    println!("\n📊 Total: {} columns", columns.len());
    Ok(())
}
