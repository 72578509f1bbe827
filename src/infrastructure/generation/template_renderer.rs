//! Tera-based template renderer implementation

use std::error::Error as _;
use tera::Tera;
use tracing::debug;

use crate::generation::{GenerationError, RenderContext, TemplateRenderer};
use crate::infrastructure::templates::{CSHARP_CLIENT_TEMPLATE, CSHARP_CLIENT_TEMPLATE_NAME};

/// Tera-based template renderer
pub struct TeraTemplateRenderer {
    template: String,
}

impl TeraTemplateRenderer {
    /// Renderer for the embedded C# client template
    pub fn new() -> Self {
        Self::with_template(CSHARP_CLIENT_TEMPLATE.to_string())
    }

    /// Renderer for a caller-supplied template source
    pub fn with_template(template: String) -> Self {
        Self { template }
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(&self, context: &RenderContext) -> Result<String, GenerationError> {
        let mut tera = Tera::default();
        // Generated code is not HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_template(CSHARP_CLIENT_TEMPLATE_NAME, &self.template)
            .map_err(|e| {
                GenerationError::RenderError(format!("Failed to add template: {}", describe(&e)))
            })?;

        let output = tera
            .render(CSHARP_CLIENT_TEMPLATE_NAME, &context.to_tera_context())
            .map_err(|e| {
                GenerationError::RenderError(format!(
                    "Failed to render {CSHARP_CLIENT_TEMPLATE_NAME}: {}",
                    describe(&e)
                ))
            })?;

        debug!(bytes = output.len(), "Rendered template");
        Ok(output)
    }
}

/// Tera keeps the useful part of its errors in the source chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
