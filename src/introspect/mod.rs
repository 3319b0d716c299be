//! Database schema introspection.
//!
//! One introspector per supported dialect behind a common trait, plus
//! [`SchemaSession`], which resolves the working schema once per run and
//! applies the listing policy shared by every dialect.

mod mysql;
mod postgres;
mod row;

pub use mysql::MySqlIntrospector;
pub use postgres::PostgresIntrospector;
pub use row::{normalize_rows, Column, RawColumnRow};

use async_trait::async_trait;

use crate::error::{GeneratorError, Result};
use crate::naming::TableSpec;

/// Migrations bookkeeping table, never generated.
pub const MIGRATIONS_TABLE: &str = "migrations";

/// Schema PostgreSQL falls back to when none is requested.
const POSTGRES_DEFAULT_SCHEMA: &str = "public";

/// Supported database dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    MySql,
    Postgres,
}

impl Driver {
    /// Detect the dialect from a connection URL.
    pub fn from_url(database_url: &str) -> Result<Self> {
        if database_url.starts_with("mysql://") {
            Ok(Driver::MySql)
        } else if database_url.starts_with("postgres://")
            || database_url.starts_with("postgresql://")
        {
            Ok(Driver::Postgres)
        } else {
            Err(GeneratorError::UnsupportedDriver(database_url.to_string()))
        }
    }
}

/// Dialect-specific catalog queries.
#[async_trait]
pub trait DatabaseIntrospector: Send + Sync {
    /// The dialect behind this introspector.
    fn driver(&self) -> Driver;

    /// Name of the connected database.
    async fn database_name(&self) -> Result<String>;

    /// Distinct table names recorded in the catalog for `schema`.
    async fn table_names(&self, schema: &str) -> Result<Vec<String>>;

    /// Raw column rows for `schema`.`table`, before shape normalization.
    async fn column_rows(&self, schema: &str, table: &str) -> Result<Vec<RawColumnRow>>;
}

/// Create an introspector for the given connection URL.
pub async fn create_introspector(
    database_url: &str,
    max_connections: u32,
) -> Result<Box<dyn DatabaseIntrospector>> {
    match Driver::from_url(database_url)? {
        Driver::MySql => Ok(Box::new(
            MySqlIntrospector::connect(database_url, max_connections).await?,
        )),
        Driver::Postgres => Ok(Box::new(
            PostgresIntrospector::connect(database_url, max_connections).await?,
        )),
    }
}

/// An introspection session against one connection.
///
/// The working schema is resolved exactly once, before any catalog query.
/// Whether it came from `--schema` or from the dialect default decides how
/// discovered tables are presented (bare vs `schema.table`).
pub struct SchemaSession {
    introspector: Box<dyn DatabaseIntrospector>,
    working_schema: String,
    schema_was_defaulted: bool,
}

impl SchemaSession {
    /// Open a session, resolving the working schema.
    ///
    /// An absent or empty requested schema falls back to the dialect default:
    /// `public` for PostgreSQL, the connected database's name for MySQL.
    pub async fn open(
        introspector: Box<dyn DatabaseIntrospector>,
        requested_schema: Option<&str>,
    ) -> Result<Self> {
        let (working_schema, schema_was_defaulted) = match requested_schema {
            Some(schema) if !schema.is_empty() => (schema.to_string(), false),
            _ => {
                let resolved = match introspector.driver() {
                    Driver::Postgres => POSTGRES_DEFAULT_SCHEMA.to_string(),
                    Driver::MySql => introspector.database_name().await?,
                };
                (resolved, true)
            }
        };
        log::debug!(
            "working schema '{}' ({})",
            working_schema,
            if schema_was_defaulted {
                "defaulted"
            } else {
                "explicit"
            }
        );

        Ok(Self {
            introspector,
            working_schema,
            schema_was_defaulted,
        })
    }

    pub fn working_schema(&self) -> &str {
        &self.working_schema
    }

    /// List the tables a generation run would cover.
    ///
    /// Names come back bare when the schema was defaulted and qualified as
    /// `schema.table` when the user requested one explicitly. The migrations
    /// bookkeeping table is excluded either way, by its bare name.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        if self.working_schema.is_empty() {
            return Ok(Vec::new());
        }
        let names = self.introspector.table_names(&self.working_schema).await?;
        Ok(names
            .into_iter()
            .filter(|name| name != MIGRATIONS_TABLE)
            .map(|name| {
                if self.schema_was_defaulted {
                    name
                } else {
                    format!("{}.{}", self.working_schema, name)
                }
            })
            .collect())
    }

    /// Fetch and normalize the columns of one table identifier.
    ///
    /// A `schema.` qualifier on the identifier overrides the session schema
    /// for that table only. Rows in an unrecognized layout are reported and
    /// skipped.
    pub async fn describe_columns(&self, identifier: &str) -> Result<Vec<Column>> {
        let spec = TableSpec::parse(identifier);
        let schema = spec.schema_or(&self.working_schema);
        log::debug!("describing columns of {}.{}", schema, spec.bare_name());
        let rows = self
            .introspector
            .column_rows(schema, spec.bare_name())
            .await?;
        Ok(normalize_rows(identifier, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeIntrospector {
        driver: Driver,
        database: &'static str,
        tables: Vec<(&'static str, &'static str)>,
        columns: Vec<(&'static str, &'static str, RawColumnRow)>,
    }

    impl FakeIntrospector {
        fn boxed(self) -> Box<dyn DatabaseIntrospector> {
            Box::new(self)
        }
    }

    #[async_trait]
    impl DatabaseIntrospector for FakeIntrospector {
        fn driver(&self) -> Driver {
            self.driver
        }

        async fn database_name(&self) -> Result<String> {
            Ok(self.database.to_string())
        }

        async fn table_names(&self, schema: &str) -> Result<Vec<String>> {
            Ok(self
                .tables
                .iter()
                .filter(|(s, _)| *s == schema)
                .map(|(_, t)| t.to_string())
                .collect())
        }

        async fn column_rows(&self, schema: &str, table: &str) -> Result<Vec<RawColumnRow>> {
            Ok(self
                .columns
                .iter()
                .filter(|(s, t, _)| *s == schema && *t == table)
                .map(|(_, _, row)| row.clone())
                .collect())
        }
    }

    fn catalog_row(name: &str, raw_type: &str) -> RawColumnRow {
        RawColumnRow::Catalog {
            column_name: name.to_string(),
            data_type: raw_type.to_string(),
        }
    }

    #[test]
    fn test_driver_detection() {
        assert_eq!(Driver::from_url("mysql://u@localhost/db").unwrap(), Driver::MySql);
        assert_eq!(
            Driver::from_url("postgres://u@localhost/db").unwrap(),
            Driver::Postgres
        );
        assert_eq!(
            Driver::from_url("postgresql://u@localhost/db").unwrap(),
            Driver::Postgres
        );
        assert!(Driver::from_url("sqlite://file.db").is_err());
    }

    #[tokio::test]
    async fn test_postgres_defaults_to_public_schema() {
        let session = SchemaSession::open(
            FakeIntrospector {
                driver: Driver::Postgres,
                database: "shop",
                tables: vec![],
                columns: vec![],
            }
            .boxed(),
            None,
        )
        .await
        .unwrap();
        assert_eq!(session.working_schema(), "public");
    }

    #[tokio::test]
    async fn test_mysql_defaults_to_database_name() {
        let session = SchemaSession::open(
            FakeIntrospector {
                driver: Driver::MySql,
                database: "shop",
                tables: vec![],
                columns: vec![],
            }
            .boxed(),
            Some(""),
        )
        .await
        .unwrap();
        assert_eq!(session.working_schema(), "shop");
    }

    #[tokio::test]
    async fn test_defaulted_schema_lists_bare_names_without_migrations() {
        let session = SchemaSession::open(
            FakeIntrospector {
                driver: Driver::MySql,
                database: "shop",
                tables: vec![
                    ("shop", "migrations"),
                    ("shop", "orders"),
                    ("shop", "users"),
                ],
                columns: vec![],
            }
            .boxed(),
            None,
        )
        .await
        .unwrap();
        assert_eq!(session.list_tables().await.unwrap(), vec!["orders", "users"]);
    }

    #[tokio::test]
    async fn test_explicit_schema_lists_qualified_names() {
        let session = SchemaSession::open(
            FakeIntrospector {
                driver: Driver::Postgres,
                database: "shop",
                tables: vec![("sales", "orders"), ("sales", "migrations")],
                columns: vec![],
            }
            .boxed(),
            Some("sales"),
        )
        .await
        .unwrap();
        assert_eq!(session.list_tables().await.unwrap(), vec!["sales.orders"]);
    }

    #[tokio::test]
    async fn test_describe_uses_identifier_qualifier_over_session_schema() {
        let session = SchemaSession::open(
            FakeIntrospector {
                driver: Driver::Postgres,
                database: "shop",
                tables: vec![],
                columns: vec![
                    ("public", "users", catalog_row("id", "bigint")),
                    ("audit", "users", catalog_row("event", "text")),
                ],
            }
            .boxed(),
            None,
        )
        .await
        .unwrap();

        let default_schema = session.describe_columns("users").await.unwrap();
        assert_eq!(default_schema, vec![Column::new("id", "bigint")]);

        let qualified = session.describe_columns("audit.users").await.unwrap();
        assert_eq!(qualified, vec![Column::new("event", "text")]);
    }
}
