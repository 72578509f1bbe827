//! restgen - generates a typed C# REST client from a Swagger 2.0 document
#![deny(unsafe_code)]

pub mod generation;
pub mod infrastructure;
