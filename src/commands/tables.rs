//! The `tables` command: list the tables a generation run would cover.

use anyhow::Result;
use clap::Args;

/// Arguments for `modelgen tables`.
#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Named connection from modelgen.toml
    #[arg(long)]
    pub connection: Option<String>,

    /// Schema to introspect (defaults to public on PostgreSQL, the database name on MySQL)
    #[arg(long)]
    pub schema: Option<String>,
}

pub async fn run(args: TablesArgs) -> Result<()> {
    let session = super::open_session(args.connection.as_deref(), args.schema.as_deref()).await?;

    let tables = session.list_tables().await?;
    if tables.is_empty() {
        println!("No tables found in schema '{}'.", session.working_schema());
        return Ok(());
    }

    println!("📋 Tables in schema '{}':\n", session.working_schema());
    for table in &tables {
        println!("  {}", table);
    }
    println!("\n📊 Total: {} tables", tables.len());
    Ok(())
}
