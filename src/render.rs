//! Model source rendering.
//!
//! A model file is the stub template with nine tokens substituted. Every
//! token is defined on every render (empty when the section does not apply),
//! so custom templates can use any subset and still render.

use handlebars::Handlebars;
use serde::Serialize;

use crate::classify::FieldSets;
use crate::error::{GeneratorError, Result};

/// Stub template embedded in the binary.
pub const DEFAULT_MODEL_STUB: &str = include_str!("../stubs/model.stub");

const MODEL_TEMPLATE: &str = "model";

/// Token values for one model render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholders {
    pub class: String,
    pub table: String,
    pub fillable: String,
    pub hidden: String,
    pub casts: String,
    pub dates: String,
    pub connection: String,
    pub timestamps: String,
    pub modelnamespace: String,
}

impl Placeholders {
    /// Assemble the token values for one table.
    ///
    /// `table_identifier` is written into the model verbatim, qualifier
    /// included, so the model targets the same table the run introspected.
    pub fn assemble(
        class_name: &str,
        table_identifier: &str,
        sets: &FieldSets,
        namespace: &str,
        connection: Option<&str>,
    ) -> Self {
        Self {
            class: class_name.to_string(),
            table: table_identifier.to_string(),
            fillable: quoted_list(&sets.fillable),
            hidden: quoted_list(&sets.hidden),
            casts: cast_pairs(&sets.boolean_casts),
            dates: quoted_list(&sets.dates),
            connection: connection_block(connection),
            timestamps: timestamps_directive(sets.uses_timestamps),
            modelnamespace: namespace.to_string(),
        }
    }
}

/// `'a', 'b', 'c'`
fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `'flag' => 'boolean', ...`
fn cast_pairs(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}' => 'boolean'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Empty keeps Eloquent's automatic timestamps; the directive turns them off.
fn timestamps_directive(uses_timestamps: bool) -> String {
    if uses_timestamps {
        String::new()
    } else {
        "public $timestamps = false;".to_string()
    }
}

/// Doc-block plus connection property, pre-indented for the class body.
fn connection_block(connection: Option<&str>) -> String {
    match connection {
        Some(name) if !name.is_empty() => format!(
            "/**\n     * The connection name for the model.\n     *\n     * @var string\n     */\n    protected $connection = '{name}';"
        ),
        _ => String::new(),
    }
}

/// Renders model source files from a stub template.
pub struct ModelRenderer {
    handlebars: Handlebars<'static>,
}

impl ModelRenderer {
    /// A renderer around the embedded stub.
    pub fn new() -> Result<Self> {
        Self::with_template(DEFAULT_MODEL_STUB)
    }

    /// A renderer around a caller-supplied template.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // generated PHP contains quotes and backslashes, never HTML-escape
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string(MODEL_TEMPLATE, template)
            .map_err(|err| GeneratorError::Template(format!("invalid model stub: {err}")))?;
        Ok(Self { handlebars })
    }

    /// Render one model source file.
    pub fn render(&self, placeholders: &Placeholders) -> Result<String> {
        self.handlebars
            .render(MODEL_TEMPLATE, placeholders)
            .map_err(|err| GeneratorError::Template(err.to_string()))
    }
}
