use handlebars::Handlebars;
use serde_json::Value;

use super::TransformError;

pub trait TemplateEngine: Send + Sync {
    /// Compile `template` and render it against `data` in one step
    fn render(&self, template: &str, data: &Value) -> Result<String, TransformError>;
}

/// Handlebars with HTML escaping turned off, so `{{value}}` inserts raw markup
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, template: &str, data: &Value) -> Result<String, TransformError> {
        self.registry
            .render_template(template, data)
            .map_err(|e| TransformError::Template(e.to_string()))
    }
}
