//! modelgen - Eloquent model classes from existing database tables
//!
//! Connects to a MySQL or PostgreSQL database, reads table and column
//! metadata from the catalog and renders one Eloquent model class per table
//! from a stub template.
//!
//! # Features
//!
//! - **Catalog introspection** for MySQL and PostgreSQL behind one session API
//! - **Column classification** into fillable, date and boolean-cast sets
//! - **Stub-based rendering** with deterministic, byte-stable output
//! - **Batch generation** with per-table fault isolation
//!
//! # Example
//!
//! ```rust,no_run
//! use modelgen::commands::generate::{generate_with_session, GenerateOptions};
//! use modelgen::introspect::{create_introspector, SchemaSession};
//! use std::path::PathBuf;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let introspector = create_introspector("postgres://localhost/shop", 5).await?;
//! let session = SchemaSession::open(introspector, None).await?;
//!
//! let options = GenerateOptions {
//!     tables: None, // discover every table
//!     connection: None,
//!     folder: PathBuf::from("app"),
//!     namespace: "App".to_string(),
//! };
//! let summary = generate_with_session(&session, &options).await?;
//! println!("{} models generated", summary.generated);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod introspect;
pub mod naming;
pub mod render;

pub use error::{GeneratorError, Result};
