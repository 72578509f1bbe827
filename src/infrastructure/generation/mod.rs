//! Generation adapters: context builders and the template renderer

pub mod context_builders;
pub mod template_renderer;

pub use context_builders::CSharpContextBuilder;
pub use template_renderer::TeraTemplateRenderer;
