//! PostgreSQL catalog introspection implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Column as _, Pool, Postgres, Row};

use super::{DatabaseIntrospector, Driver, RawColumnRow};
use crate::error::{GeneratorError, Result};

pub struct PostgresIntrospector {
    pool: Pool<Postgres>,
}

impl PostgresIntrospector {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(GeneratorError::Connect)?;

        Ok(Self { pool })
    }
}

fn raw_column_from_row(row: &PgRow) -> RawColumnRow {
    if let (Ok(column_name), Ok(data_type)) = (
        row.try_get::<String, _>("column_name"),
        row.try_get::<String, _>("data_type"),
    ) {
        return RawColumnRow::Catalog {
            column_name,
            data_type,
        };
    }
    if let (Ok(field), Ok(column_type)) = (
        row.try_get::<String, _>("Field"),
        row.try_get::<String, _>("Type"),
    ) {
        return RawColumnRow::Describe { field, column_type };
    }
    RawColumnRow::Unrecognized {
        labels: row.columns().iter().map(|c| c.name().to_string()).collect(),
    }
}

#[async_trait]
impl DatabaseIntrospector for PostgresIntrospector {
    fn driver(&self) -> Driver {
        Driver::Postgres
    }

    async fn database_name(&self) -> Result<String> {
        let sql = "SELECT current_database() as db_name";
        log::debug!("Executing query: {}", sql);
        let row = sqlx::query(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| GeneratorError::Query {
                scope: "current database".to_string(),
                source,
            })?;
        let db_name: String = row
            .try_get("db_name")
            .map_err(|err| GeneratorError::SchemaResolution(err.to_string()))?;
        Ok(db_name)
    }

    async fn table_names(&self, schema: &str) -> Result<Vec<String>> {
        let sql = r#"
            SELECT DISTINCT table_name
            FROM information_schema.columns
            WHERE table_schema = $1
            ORDER BY table_name
            "#;
        log::debug!("Executing query: {}", sql);
        let rows = sqlx::query(sql)
            .bind(schema)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| GeneratorError::Query {
                scope: format!("tables of schema '{schema}'"),
                source,
            })?;

        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("table_name").map_err(|source| {
                GeneratorError::Query {
                    scope: format!("tables of schema '{schema}'"),
                    source,
                }
            })?;
            names.push(name);
        }
        Ok(names)
    }

    async fn column_rows(&self, schema: &str, table: &str) -> Result<Vec<RawColumnRow>> {
        let sql = r#"
            SELECT column_name, data_type
            FROM information_schema.columns
            WHERE table_schema = $1 AND table_name = $2
            ORDER BY ordinal_position
            "#;
        log::debug!("Executing query: {}", sql);
        let rows = sqlx::query(sql)
            .bind(schema)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| GeneratorError::Query {
                scope: format!("columns of '{schema}.{table}'"),
                source,
            })?;

        Ok(rows.iter().map(raw_column_from_row).collect())
    }
}
