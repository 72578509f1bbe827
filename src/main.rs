//! restgen CLI entrypoint
//! Parses command-line arguments, generates the client and writes it out.
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use restgen::generation::{
    GenerationContext, Generator, GeneratorOptions, OutputSink, SchemaLoader,
};
use restgen::infrastructure::openapi::FileSchemaLoader;
use restgen::infrastructure::output::{FileSink, StdoutSink};

#[derive(Parser, Debug)]
#[command(name = "restgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Swagger 2.0 document (JSON or YAML)
    input: PathBuf,

    /// Write the generated source here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML file with generator options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Namespace of the generated unit (overrides the config file)
    #[arg(long)]
    namespace: Option<String>,

    /// Name of the generated client class (overrides the config file)
    #[arg(long)]
    client_class: Option<String>,

    /// Tera template to render instead of the embedded one
    #[arg(long)]
    template: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only generated code
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    info!(input = %cli.input.display(), "Starting restgen");

    let mut options = match &cli.config {
        Some(path) => GeneratorOptions::from_file(path)
            .await
            .with_context(|| format!("Failed to read options from {}", path.display()))?,
        None => GeneratorOptions::default(),
    };
    if let Some(namespace) = &cli.namespace {
        options.namespace = namespace.clone();
    }
    if let Some(client_class) = &cli.client_class {
        options.client_class = client_class.clone();
    }
    debug!(?options, "Resolved generator options");

    let spec = FileSchemaLoader::new()
        .load(&cli.input)
        .await
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    let generator = match &cli.template {
        Some(path) => {
            let template = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            Generator::csharp_with_template(template)
        }
        None => Generator::csharp(),
    };

    let output = generator
        .generate(&GenerationContext::new(spec, options))
        .context("Failed to generate client")?;

    // Nothing is written unless generation succeeded
    let written = match &cli.output {
        Some(path) => FileSink::new(path).write(&output).await,
        None => StdoutSink::new().write(&output).await,
    };
    written.context("Failed to write generated client")?;

    Ok(())
}
