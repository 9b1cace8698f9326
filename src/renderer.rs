//! Template rendering for generated source files.
//! Entry points are MiniJinja templates rendered against a JSON context.
use crate::error::Result;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer. Trailing newlines of templates are kept
    /// so generated files end with a newline.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template cannot be compiled or rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_keeps_trailing_newline() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "project_name": "shopsvc" });

        let result = engine.render("{{ project_name }} service started\n", &context).unwrap();
        assert_eq!(result, "shopsvc service started\n");
    }

    #[test]
    fn test_render_does_not_escape_values() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "project_name": "a<b>&c" });

        let result = engine.render("{{ project_name }}", &context).unwrap();
        assert_eq!(result, "a<b>&c");
    }

    #[test]
    fn test_render_invalid_template() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("{{ unclosed", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::TemplateError(_))));
    }
}
