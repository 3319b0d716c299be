//! Command implementations behind the CLI surface.

pub mod columns;
pub mod generate;
pub mod tables;

use std::path::Path;

use crate::config::{self, AppConfig};
use crate::error::Result;
use crate::introspect::{create_introspector, SchemaSession};

/// Resolve the connection and open an introspection session.
///
/// Shared by every command that talks to a database. An empty
/// `--connection` value is treated as absent.
pub(crate) async fn open_session(
    connection: Option<&str>,
    schema: Option<&str>,
) -> Result<SchemaSession> {
    let connection = connection.filter(|name| !name.is_empty());
    let app_config = AppConfig::load(Path::new("."))?;
    let resolved = config::resolve_connection(&app_config, connection)?;
    println!("📍 Connecting to: {}", config::masked_url(&resolved.url));

    let introspector = create_introspector(&resolved.url, resolved.max_connections).await?;
    SchemaSession::open(introspector, schema).await
}
