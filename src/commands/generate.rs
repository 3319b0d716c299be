//! The `generate` command: one Eloquent model file per requested table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tokio::fs;

use crate::classify::FieldSets;
use crate::error::GeneratorError;
use crate::introspect::SchemaSession;
use crate::naming::{self, DEFAULT_MODEL_DIR};
use crate::render::{ModelRenderer, Placeholders};

/// Arguments for `modelgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Comma-separated table names to generate (e.g. users,posts)
    #[arg(long, value_name = "TABLES", conflicts_with = "all")]
    pub table: Option<String>,

    /// Generate a model for every table in the working schema
    #[arg(long)]
    pub all: bool,

    /// Named connection from modelgen.toml; also written into the models
    #[arg(long)]
    pub connection: Option<String>,

    /// Schema to introspect (defaults to public on PostgreSQL, the database name on MySQL)
    #[arg(long)]
    pub schema: Option<String>,

    /// Output directory for model files
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    pub folder: String,

    /// Namespace written into generated models
    #[arg(long)]
    pub namespace: Option<String>,
}

/// Options for one generation run, normalized from the CLI arguments.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Comma-separated table list; `None` means discover every table.
    pub tables: Option<String>,
    /// Connection name written into the models, when one was requested.
    pub connection: Option<String>,
    /// Output directory, trailing slash stripped.
    pub folder: PathBuf,
    /// Normalized namespace.
    pub namespace: String,
}

impl GenerateOptions {
    pub fn from_args(args: &GenerateArgs) -> Self {
        let folder = args.folder.trim_end_matches('/');
        let folder = if folder.is_empty() {
            DEFAULT_MODEL_DIR
        } else {
            folder
        };
        Self {
            tables: args.table.clone().filter(|csv| !csv.is_empty()),
            connection: args.connection.clone().filter(|name| !name.is_empty()),
            folder: PathBuf::from(folder),
            namespace: naming::normalize_namespace(args.namespace.as_deref()),
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Entry point for the CLI command.
pub async fn run(args: GenerateArgs) -> Result<()> {
    // worklist validation comes before any config or connection work; an
    // empty --table value counts as absent
    let has_tables = args.table.as_deref().is_some_and(|csv| !csv.is_empty());
    if !has_tables && !args.all {
        return Err(GeneratorError::NoTablesRequested.into());
    }

    let options = GenerateOptions::from_args(&args);
    let session = super::open_session(args.connection.as_deref(), args.schema.as_deref()).await?;

    let summary = generate_with_session(&session, &options).await?;
    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} tables failed",
            summary.failed,
            summary.generated + summary.failed
        );
    }
    Ok(())
}

/// Run generation over an open session.
///
/// Per-table fault isolation: a table that fails to describe, render or write
/// is reported and counted, and the loop continues. Only table discovery and
/// an invalid template abort the whole run.
pub async fn generate_with_session(
    session: &SchemaSession,
    options: &GenerateOptions,
) -> Result<GenerateSummary> {
    let worklist: Vec<String> = match &options.tables {
        Some(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
        None => session.list_tables().await?,
    };
    println!("📋 Found {} tables", worklist.len());

    let renderer = ModelRenderer::new()?;
    // a creation failure surfaces again as a write failure on every table,
    // so the loop still runs and reports per table
    if let Err(err) = ensure_output_dir(&options.folder).await {
        println!("⚠️  {}", err);
    }

    let mut summary = GenerateSummary::default();
    // class name -> identifier it was first generated from
    let mut class_sources: HashMap<String, String> = HashMap::new();

    for identifier in &worklist {
        match generate_one(session, &renderer, options, identifier, &mut class_sources).await {
            Ok(path) => {
                println!("✅ Generated model: {}", path.display());
                summary.generated += 1;
            }
            Err(err) => {
                println!("⚠️  Failed {}: {}", identifier, err);
                summary.failed += 1;
            }
        }
    }

    if summary.failed == 0 {
        println!("🎉 Model generation completed!");
    }
    println!(
        "📊 Generated {} models, {} failed",
        summary.generated, summary.failed
    );
    Ok(summary)
}

async fn generate_one(
    session: &SchemaSession,
    renderer: &ModelRenderer,
    options: &GenerateOptions,
    identifier: &str,
    class_sources: &mut HashMap<String, String>,
) -> crate::error::Result<PathBuf> {
    let class_name = naming::to_class_name(identifier);
    if let Some(first) = class_sources.get(&class_name) {
        return Err(GeneratorError::ClassNameCollision {
            class: class_name,
            first: first.clone(),
            second: identifier.to_string(),
        });
    }

    let columns = session.describe_columns(identifier).await?;
    if columns.is_empty() {
        println!("⚠️  Table {} has no columns, generating an empty model", identifier);
    }

    let sets = FieldSets::from_columns(&columns);
    let placeholders = Placeholders::assemble(
        &class_name,
        identifier,
        &sets,
        &options.namespace,
        options.connection.as_deref(),
    );
    let rendered = renderer.render(&placeholders)?;

    let path = naming::output_path(&options.folder, &class_name);
    fs::write(&path, rendered)
        .await
        .map_err(|err| GeneratorError::Io {
            path: path.clone(),
            source: err,
        })?;

    class_sources.insert(class_name, identifier.to_string());
    Ok(path)
}

/// The conventional default directory is assumed to exist and is never
/// created; anything else is created once, before the table loop.
async fn ensure_output_dir(folder: &Path) -> crate::error::Result<()> {
    if folder == Path::new(DEFAULT_MODEL_DIR) || folder.exists() {
        return Ok(());
    }
    fs::create_dir_all(folder)
        .await
        .map_err(|err| GeneratorError::Io {
            path: folder.to_path_buf(),
            source: err,
        })
}
