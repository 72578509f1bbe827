//! Generator configuration
//!
//! Options name the scaffold pieces of the generated unit and the runtime
//! collaborators it calls into. They can be read from a YAML file; every
//! field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generation::GenerationError;
use crate::generation::utils::is_identifier;

/// Names and defaults baked into the generated client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Namespace wrapping the generated unit; may be dotted
    pub namespace: String,
    /// Class holding one method per operation
    pub client_class: String,
    /// Exception type carrying HTTP and protocol status codes
    pub exception_class: String,
    /// Transport interface exposing `SendAsync`
    pub http_adapter: String,
    /// Namespace providing the `ToJson` / `FromJson<T>` extensions
    pub json_namespace: String,
    /// Default request timeout in seconds
    pub default_timeout: u32,
    /// Tool name written into the "do not edit" banner
    pub generator_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: "Api".to_string(),
            client_class: "ApiClient".to_string(),
            exception_class: "ApiResponseException".to_string(),
            http_adapter: "IHttpAdapter".to_string(),
            json_namespace: "TinyJson".to_string(),
            default_timeout: 10,
            generator_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parse options from YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self, GenerationError> {
        let options: Self = serde_yaml::from_str(content).map_err(|e| {
            GenerationError::InvalidConfiguration(format!("Failed to parse options YAML: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Read and parse an options file
    pub async fn from_file(path: &Path) -> Result<Self, GenerationError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_yaml_str(&content)
    }

    /// Check that every configured name is usable in generated code
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !self.namespace.split('.').all(is_identifier) {
            return Err(GenerationError::InvalidConfiguration(format!(
                "namespace '{}' is not a valid C# namespace",
                self.namespace
            )));
        }

        for (field, value) in [
            ("client_class", &self.client_class),
            ("exception_class", &self.exception_class),
            ("http_adapter", &self.http_adapter),
        ] {
            if !is_identifier(value) {
                return Err(GenerationError::InvalidConfiguration(format!(
                    "{field} '{value}' is not a valid C# identifier"
                )));
            }
        }

        if !self.json_namespace.split('.').all(is_identifier) {
            return Err(GenerationError::InvalidConfiguration(format!(
                "json_namespace '{}' is not a valid C# namespace",
                self.json_namespace
            )));
        }

        // Written inside the `/* ... */` banner
        if self.generator_name.contains("*/") || self.generator_name.contains(['\n', '\r']) {
            return Err(GenerationError::InvalidConfiguration(format!(
                "generator_name '{}' cannot contain '*/' or line breaks",
                self.generator_name.escape_debug()
            )));
        }

        if self.default_timeout == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "default_timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}
