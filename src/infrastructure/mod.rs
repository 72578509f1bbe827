//! Infrastructure layer - schema loading, rendering and output adapters

pub mod generation;
pub mod openapi;
pub mod output;
pub mod templates;
