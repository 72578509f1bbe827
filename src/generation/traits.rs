//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::generation::{GenerationContext, GenerationError, RenderContext};
use crate::infrastructure::openapi::ApiSpec;

/// Builds the render context of one target language from the schema model
pub trait ContextBuilder: Send + Sync {
    fn build(&self, context: &GenerationContext) -> Result<RenderContext, GenerationError>;
}

/// Renders a render context into one source unit
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, context: &RenderContext) -> Result<String, GenerationError>;
}

/// Loads API descriptions into the schema model
#[async_trait]
pub trait SchemaLoader: Send + Sync {
    async fn load(&self, source: &Path) -> Result<ApiSpec, GenerationError>;
}

/// Persists a completely rendered source unit
#[async_trait]
pub trait OutputSink: Send + Sync {
    async fn write(&self, content: &str) -> Result<(), GenerationError>;
}
