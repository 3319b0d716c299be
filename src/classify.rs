//! Column classification rules.
//!
//! Every introspected column lands in exactly one category: the primary
//! identifier (dropped), an audit timestamp (drives the timestamps switch) or
//! a fillable column, optionally tagged for date mutation or a boolean cast.

use crate::introspect::Column;

/// Primary identifier column, never emitted into any generated list.
const IDENTIFIER_COLUMN: &str = "id";

/// Audit columns handled by Eloquent's automatic timestamps.
const CREATED_AT_COLUMN: &str = "created_at";
const UPDATED_AT_COLUMN: &str = "updated_at";

/// Declared types mutated to dates on the model. Exact matches only, so
/// PostgreSQL's `timestamp without time zone` stays out.
const DATE_TYPES: [&str; 3] = ["timestamp", "datetime", "date"];

/// Declared type cast to boolean on the model.
const BOOLEAN_TYPE: &str = "tinyint(1)";

/// How a column participates in the generated model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The primary identifier, excluded from every generated list.
    Excluded,
    /// An audit timestamp column.
    Timestamp,
    /// A mass-assignable column with its type tags.
    Fillable { date_typed: bool, boolean_cast: bool },
}

/// Classify a single column by name and declared type. First match wins.
pub fn classify(column: &Column) -> Classification {
    if column.name == IDENTIFIER_COLUMN {
        return Classification::Excluded;
    }
    if column.name == CREATED_AT_COLUMN || column.name == UPDATED_AT_COLUMN {
        return Classification::Timestamp;
    }
    let declared = column.raw_type.to_lowercase();
    Classification::Fillable {
        date_typed: DATE_TYPES.contains(&declared.as_str()),
        boolean_cast: declared == BOOLEAN_TYPE,
    }
}

/// Ordered field sets for one table, aggregated from its classified columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSets {
    /// Mass-assignable column names, in catalog order.
    pub fillable: Vec<String>,
    /// Columns mutated to dates. Always a subset of `fillable`.
    pub dates: Vec<String>,
    /// Columns cast to boolean. Always a subset of `fillable`.
    pub boolean_casts: Vec<String>,
    /// Hidden columns. Nothing sets these today; the list exists so the
    /// hidden placeholder keeps rendering for custom templates.
    pub hidden: Vec<String>,
    /// Whether the model keeps automatic timestamp handling.
    pub uses_timestamps: bool,
}

impl FieldSets {
    /// Aggregate classified columns, preserving their catalog order.
    pub fn from_columns(columns: &[Column]) -> Self {
        let mut sets = Self::default();
        for column in columns {
            match classify(column) {
                Classification::Excluded => {}
                Classification::Timestamp => sets.uses_timestamps = true,
                Classification::Fillable {
                    date_typed,
                    boolean_cast,
                } => {
                    sets.fillable.push(column.name.clone());
                    if date_typed {
                        sets.dates.push(column.name.clone());
                    }
                    if boolean_cast {
                        sets.boolean_casts.push(column.name.clone());
                    }
                }
            }
        }
        sets
    }
}
