//! Swagger document loading and the schema model

pub mod file_loader;
pub mod parser;
pub mod types;

pub use file_loader::FileSchemaLoader;
pub use parser::OpenApiParser;
pub use types::*;
