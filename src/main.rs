use clap::{Parser, Subcommand};

use modelgen::commands;
use modelgen::commands::columns::ColumnsArgs;
use modelgen::commands::generate::GenerateArgs;
use modelgen::commands::tables::TablesArgs;

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(about = "Generate Eloquent model classes from the tables of an existing database")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose generator output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model classes from live table metadata
    Generate(GenerateArgs),

    /// List the tables a generation run would cover
    Tables(TablesArgs),

    /// Show one table's columns and how they classify
    Columns(ColumnsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args).await,
        Commands::Tables(args) => commands::tables::run(args).await,
        Commands::Columns(args) => commands::columns::run(args).await,
    }
}
