//! MySQL catalog introspection implementation

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{Column as _, MySql, Pool, Row};

use super::{DatabaseIntrospector, Driver, RawColumnRow};
use crate::error::{GeneratorError, Result};

pub struct MySqlIntrospector {
    pool: Pool<MySql>,
}

impl MySqlIntrospector {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = sqlx::mysql::MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(GeneratorError::Connect)?;

        Ok(Self { pool })
    }
}

fn raw_column_from_row(row: &MySqlRow) -> RawColumnRow {
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
impl DatabaseIntrospector for MySqlIntrospector {
    fn driver(&self) -> Driver {
        Driver::MySql
    }

    async fn database_name(&self) -> Result<String> {
        let sql = "SELECT DATABASE() as db_name";
        log::debug!("Executing query: {}", sql);
        let row = sqlx::query(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| GeneratorError::Query {
                scope: "current database".to_string(),
                source,
            })?;
        let db_name: Option<String> = row
            .try_get("db_name")
            .map_err(|err| GeneratorError::SchemaResolution(err.to_string()))?;
        db_name.ok_or_else(|| {
            GeneratorError::SchemaResolution(
                "no database selected; put one in the connection URL or pass --schema".to_string(),
            )
        })
    }

    async fn table_names(&self, schema: &str) -> Result<Vec<String>> {
        let sql = r#"
            SELECT DISTINCT c.TABLE_NAME as table_name
            FROM information_schema.columns c
            WHERE c.TABLE_SCHEMA = ?
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

    /// Columns come back with describe-style labels; `COLUMN_TYPE` keeps the
    /// declared display width (`tinyint(1)`) that `DATA_TYPE` drops.
    async fn column_rows(&self, schema: &str, table: &str) -> Result<Vec<RawColumnRow>> {
        let sql = r#"
            SELECT
                c.COLUMN_NAME as Field,
                CAST(c.COLUMN_TYPE AS CHAR) as Type
            FROM information_schema.columns c
            WHERE c.TABLE_SCHEMA = ? AND c.TABLE_NAME = ?
            ORDER BY c.ORDINAL_POSITION
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
