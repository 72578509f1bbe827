//! File-based Swagger document loader
//!
//! This loader handles only file I/O and decoding. The actual model
//! building is done by the [`OpenApiParser`].

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use super::parser::OpenApiParser;
use crate::generation::{GenerationError, SchemaLoader};
use crate::infrastructure::openapi::ApiSpec;

/// Loads Swagger documents (JSON or YAML) from local files
pub struct FileSchemaLoader;

impl FileSchemaLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaLoader for FileSchemaLoader {
    async fn load(&self, source: &Path) -> Result<ApiSpec, GenerationError> {
        let content = fs::read_to_string(source).await?;
        debug!(path = %source.display(), bytes = content.len(), "Read API description");

        let value = decode(source, &content)?;
        let spec = OpenApiParser::new(value).parse()?;

        info!(
            path = %source.display(),
            definitions = spec.definitions.len(),
            operations = spec.operations.len(),
            "Loaded API description"
        );
        Ok(spec)
    }
}

/// Decodes by extension, falling back to JSON then YAML
fn decode(source: &Path, content: &str) -> Result<JsonValue, GenerationError> {
    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => serde_json::from_str(content).map_err(|e| {
            GenerationError::malformed(format!("Unable to decode {}: {e}", source.display()))
        }),
        Some("yaml") | Some("yml") => serde_yaml::from_str(content).map_err(|e| {
            GenerationError::malformed(format!("Unable to decode {}: {e}", source.display()))
        }),
        _ => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| {
                GenerationError::malformed(format!("Unable to decode {}: {e}", source.display()))
            }),
    }
}
