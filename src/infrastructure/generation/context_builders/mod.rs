//! Language-specific context builders

pub mod csharp;

pub use csharp::CSharpContextBuilder;
