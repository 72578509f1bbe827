//! Generation domain module - turns the schema model into client source
//!
//! The pure pieces live here: identifier casing ([`utils`]), `$ref`
//! resolution ([`resolver`]), the type mapper ([`types`]) and the
//! orchestrator composing a language context builder with a renderer.

pub mod context;
pub mod errors;
pub mod options;
pub mod orchestrator;
pub mod resolver;
pub mod sanitizers;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use options::*;
pub use orchestrator::*;
pub use resolver::*;
pub use traits::*;
pub use types::*;
