//! Template rendering for mcp-forge.
//! Resolves logical template identifiers against the bundled template set and
//! renders them with MiniJinja.

use crate::error::{Error, Result};
use crate::templates;
use cruet::case::{
    kebab::to_kebab_case, pascal::to_pascal_case, screaming_snake::to_screaming_snake_case,
    snake::to_snake_case,
};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a bundled template with the given context.
    ///
    /// # Arguments
    /// * `template` - Logical template identifier, e.g. `core/server.py.j2`
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Whether `template` resolves to bundled source.
    fn has_template(&self, template: &str) -> bool;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined values are strict: a template that reads a field the context does not
/// carry fails instead of rendering an empty string.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer serving the bundled template set.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_loader(|name| Ok(templates::source(name).map(str::to_string)));

        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateNotFound` if the identifier has no bundled source
    /// * `Error::ContextFieldMissing` if the template reads an absent field
    /// * `Error::MinijinjaError` for any other rendering failure
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|e| classify_error(template, e))?;
        tmpl.render(context).map_err(|e| classify_error(template, e))
    }

    fn has_template(&self, template: &str) -> bool {
        templates::source(template).is_some()
    }
}

fn classify_error(template: &str, e: minijinja::Error) -> Error {
    match e.kind() {
        ErrorKind::TemplateNotFound => {
            Error::TemplateNotFound { template: template.to_string() }
        }
        ErrorKind::UndefinedError => Error::ContextFieldMissing {
            template: template.to_string(),
            detail: e.to_string(),
        },
        _ => Error::MinijinjaError(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn case_filters_are_registered() {
        let renderer = MiniJinjaRenderer::new();
        let tmpl = renderer.env.template_from_str("{{ name | pascal_case }}").unwrap();
        assert_eq!(tmpl.render(json!({ "name": "my-server" })).unwrap(), "MyServer");

        let tmpl = renderer.env.template_from_str("{{ name | screaming_snake_case }}").unwrap();
        assert_eq!(tmpl.render(json!({ "name": "my-server" })).unwrap(), "MY_SERVER");
    }

    #[test]
    fn strict_undefined_is_classified() {
        let renderer = MiniJinjaRenderer::new();
        let err = renderer.render("core/__init__.py.j2", &json!({})).unwrap_err();
        assert!(matches!(err, Error::ContextFieldMissing { .. }), "{err:?}");
    }
}
