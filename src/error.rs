//! Error types for the generator.

use std::path::PathBuf;
use thiserror::Error;

/// Generator errors
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The run requested no work: neither a table list nor `--all`.
    #[error("no --table specified or --all")]
    NoTablesRequested,

    #[error("Unknown connection '{0}': not declared in modelgen.toml")]
    UnknownConnection(String),

    #[error("No database connection: set DATABASE_URL or declare a connection in modelgen.toml")]
    NoConnection,

    #[error("Unsupported database URL '{0}': expected mysql:// or postgres://")]
    UnsupportedDriver(String),

    #[error("Connection error: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Schema resolution error: {0}")]
    SchemaResolution(String),

    #[error("Query error for {scope}: {source}")]
    Query {
        scope: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Class name collision: '{second}' maps to {class}, already generated from '{first}'")]
    ClassNameCollision {
        class: String,
        first: String,
        second: String,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
