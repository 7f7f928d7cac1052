//! Text template rendering used to format generated Markdown.
use crate::error::{DocError, DocResult};
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
    /// * `DocResult<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> DocResult<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps the trailing newline of templates, so
    /// rendered fragments join byte-exactly.
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
    /// * `DocError::TemplateError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> DocResult<String> {
        self.env
            .render_str(template, context)
            .map_err(|e| DocError::TemplateError(e.to_string()))
    }
}
