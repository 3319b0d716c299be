//! Table identifier parsing and name derivation for generated models.

use std::path::{Path, PathBuf};

/// Namespace applied when `--namespace` is not given.
pub const DEFAULT_NAMESPACE: &str = "App";

/// Conventional output directory for model files.
pub const DEFAULT_MODEL_DIR: &str = "app";

/// Extension of generated model files.
pub const MODEL_FILE_EXTENSION: &str = "php";

/// A table identifier as supplied on the command line or by table discovery.
///
/// A leading `schema.` qualifier overrides the session's working schema for
/// that table only. A dot in the leading position is not a qualifier, so
/// `.users` parses as an unqualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    schema: Option<String>,
    bare_name: String,
}

impl TableSpec {
    /// Split `schema.table` at the first interior dot.
    pub fn parse(identifier: &str) -> Self {
        match identifier.split_once('.') {
            Some((schema, bare)) if !schema.is_empty() => Self {
                schema: Some(schema.to_string()),
                bare_name: bare.to_string(),
            },
            _ => Self {
                schema: None,
                bare_name: identifier.to_string(),
            },
        }
    }

    /// The table name without any schema qualifier.
    pub fn bare_name(&self) -> &str {
        &self.bare_name
    }

    /// The explicit schema qualifier, or `default` when the identifier has
    /// none.
    pub fn schema_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.schema.as_deref().unwrap_or(default)
    }
}

/// Derive the model class name for a table identifier.
///
/// The schema qualifier is dropped, `_` and `.` become word boundaries, each
/// word gets a leading capital and the joined result is singularized.
/// `blog_posts` becomes `BlogPost`, `order.line_items` becomes `LineItem`.
pub fn to_class_name(identifier: &str) -> String {
    let spec = TableSpec::parse(identifier);
    let pascal: String = spec
        .bare_name()
        .replace(['.', '_'], " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect();
    singularize(&pascal)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Best-effort lexical singularization.
///
/// Handles the regular English patterns only; irregular plurals pass through
/// unchanged (`People` stays `People`).
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            // keep the consonant cluster, drop the plural "es"
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if name.ends_with("ss") || name.ends_with("us") || name.ends_with("is") {
        return name.to_string();
    }
    match name.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Normalize a user-supplied namespace into the form written into models.
///
/// A leading `app` segment is case-corrected to `App`, a trailing slash is
/// dropped and path separators become namespace separators.
pub fn normalize_namespace(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return DEFAULT_NAMESPACE.to_string(),
    };
    let corrected = match raw.split_once('/') {
        Some(("app", rest)) => format!("App/{rest}"),
        None if raw == "app" => DEFAULT_NAMESPACE.to_string(),
        _ => raw.to_string(),
    };
    corrected.trim_end_matches('/').replace('/', "\\")
}

/// Path of the model file generated for `class_name`.
pub fn output_path(directory: &Path, class_name: &str) -> PathBuf {
    directory.join(format!("{class_name}.{MODEL_FILE_EXTENSION}"))
}
