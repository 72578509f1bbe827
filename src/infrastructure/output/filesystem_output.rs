//! Output sinks writing the rendered unit to a file or stdout

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::generation::{GenerationError, OutputSink};

/// Sink that writes the generated unit to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputSink for StdoutSink {
    async fn write(&self, content: &str) -> Result<(), GenerationError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Sink that writes the generated unit to a single file
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OutputSink for FileSink {
    async fn write(&self, content: &str) -> Result<(), GenerationError> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                GenerationError::IoError(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create directory {}: {}", parent.display(), e),
                ))
            })?;
        }

        let mut file = fs::File::create(&self.path).await.map_err(|e| {
            GenerationError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to create file {}: {}", self.path.display(), e),
            ))
        })?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        info!(path = %self.path.display(), bytes = content.len(), "Wrote generated client");
        Ok(())
    }
}
