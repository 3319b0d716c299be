//! Raw metadata row shapes and their normalization.
//!
//! The two supported dialects label their column listings differently:
//! PostgreSQL's catalog uses `column_name`/`data_type`, MySQL's describe
//! output uses `Field`/`Type`. Both shapes normalize into [`Column`]; rows in
//! neither layout are reported and skipped rather than failing the table.

/// A column row as returned by the catalog, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawColumnRow {
    /// `column_name` / `data_type` labels.
    Catalog {
        column_name: String,
        data_type: String,
    },
    /// `Field` / `Type` labels. The type carries the full declared form,
    /// display width included (`tinyint(1)`).
    Describe { field: String, column_type: String },
    /// Neither known layout; carries the labels that were seen.
    Unrecognized { labels: Vec<String> },
}

/// A normalized table column: name plus the declared type, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub raw_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

/// Normalize raw rows into columns, skipping unrecognized layouts with a
/// warning that names the table and the labels seen.
pub fn normalize_rows(table: &str, rows: Vec<RawColumnRow>) -> Vec<Column> {
    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            RawColumnRow::Catalog {
                column_name,
                data_type,
            } => columns.push(Column::new(column_name, data_type)),
            RawColumnRow::Describe { field, column_type } => {
                columns.push(Column::new(field, column_type))
            }
            RawColumnRow::Unrecognized { labels } => {
                log::warn!(
                    "table {}: skipping column row with unrecognized layout (labels: {})",
                    table,
                    labels.join(", ")
                );
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape_normalizes() {
        let rows = vec![RawColumnRow::Catalog {
            column_name: "title".to_string(),
            data_type: "character varying".to_string(),
        }];
        assert_eq!(
            normalize_rows("posts", rows),
            vec![Column::new("title", "character varying")]
        );
    }

    #[test]
    fn test_describe_shape_normalizes() {
        let rows = vec![RawColumnRow::Describe {
            field: "active".to_string(),
            column_type: "tinyint(1)".to_string(),
        }];
        assert_eq!(
            normalize_rows("posts", rows),
            vec![Column::new("active", "tinyint(1)")]
        );
    }

    #[test]
    fn test_unrecognized_rows_are_skipped_not_fatal() {
        let rows = vec![
            RawColumnRow::Catalog {
                column_name: "id".to_string(),
                data_type: "bigint".to_string(),
            },
            RawColumnRow::Unrecognized {
                labels: vec!["colname".to_string(), "typ".to_string()],
            },
            RawColumnRow::Describe {
                field: "name".to_string(),
                column_type: "varchar(100)".to_string(),
            },
        ];
        let columns = normalize_rows("posts", rows);
        assert_eq!(
            columns,
            vec![
                Column::new("id", "bigint"),
                Column::new("name", "varchar(100)"),
            ]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let rows = vec![
            RawColumnRow::Catalog {
                column_name: "a".to_string(),
                data_type: "text".to_string(),
            },
            RawColumnRow::Catalog {
                column_name: "b".to_string(),
                data_type: "text".to_string(),
            },
        ];
        let names: Vec<String> = normalize_rows("t", rows)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
