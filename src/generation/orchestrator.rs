//! Generation orchestration - coordinates the generation workflow

use std::sync::Arc;
use tracing::{debug, info};

use crate::generation::{ContextBuilder, GenerationContext, GenerationError, TemplateRenderer};
use crate::infrastructure::generation::{CSharpContextBuilder, TeraTemplateRenderer};

/// Orchestrates the code generation workflow
pub struct Generator {
    context_builder: Arc<dyn ContextBuilder>,
    template_renderer: Arc<dyn TemplateRenderer>,
}

impl Generator {
    pub fn new(
        context_builder: Arc<dyn ContextBuilder>,
        template_renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            context_builder,
            template_renderer,
        }
    }

    /// C# client generator using the embedded template
    pub fn csharp() -> Self {
        Self::new(
            Arc::new(CSharpContextBuilder::new()),
            Arc::new(TeraTemplateRenderer::new()),
        )
    }

    /// C# client generator rendering a caller-supplied Tera template
    pub fn csharp_with_template(template: String) -> Self {
        Self::new(
            Arc::new(CSharpContextBuilder::new()),
            Arc::new(TeraTemplateRenderer::with_template(template)),
        )
    }

    /// Execute the generation workflow.
    ///
    /// The whole unit is rendered in memory; any failure returns before
    /// anything could be written.
    pub fn generate(&self, context: &GenerationContext) -> Result<String, GenerationError> {
        // 1. Validate context
        context.validate()?;

        debug!(
            definitions = context.spec.definitions.len(),
            operations = context.spec.operations.len(),
            "Starting generation"
        );

        // 2. Build render context from the schema model
        let render_context = self.context_builder.build(context)?;

        // 3. Render
        let output = self.template_renderer.render(&render_context)?;

        info!(bytes = output.len(), "Generated client source");
        Ok(output)
    }
}
