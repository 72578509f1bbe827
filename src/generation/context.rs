//! Generation context - the data flowing through one generation run

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::generation::{GenerationError, GeneratorOptions};
use crate::infrastructure::openapi::ApiSpec;

/// Input of one generation run: the parsed document and the options
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub spec: ApiSpec,
    pub options: GeneratorOptions,
}

impl GenerationContext {
    pub fn new(spec: ApiSpec, options: GeneratorOptions) -> Self {
        Self { spec, options }
    }

    /// Validate the context has everything rendering needs
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.options.validate()
    }
}

/// Render context used for template rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    pub variables: JsonMap<String, JsonValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_context_variables() {
        let mut context = RenderContext::new();
        context.add_variable("namespace", json!("Api"));
        context.add_variable("definitions", json!([]));

        assert!(context.variables.contains_key("namespace"));
        assert!(!context.variables.contains_key("operations"));

        let tera_context = context.to_tera_context();
        assert_eq!(tera_context.get("namespace"), Some(&json!("Api")));
    }

    #[test]
    fn test_generation_context_validates_options() {
        let mut options = GeneratorOptions::default();
        options.client_class = "not valid".to_string();
        let context = GenerationContext::new(ApiSpec::default(), options);
        assert!(context.validate().is_err());
    }
}
