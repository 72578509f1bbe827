//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The input document cannot be decoded into the schema model
    #[error("Malformed input: {0}")]
    InputMalformed(String),

    /// A `$ref` points at a definition that does not exist
    #[error("Dangling reference '{reference}': no matching definition")]
    DanglingReference { reference: String },

    /// A type shape the mapper has no generated form for
    #[error("Unsupported type shape {shape} at {location}")]
    UnmappedTypeShape { shape: String, location: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::InputMalformed(message.into())
    }

    pub fn dangling<S: Into<String>>(reference: S) -> Self {
        Self::DanglingReference {
            reference: reference.into(),
        }
    }

    pub fn unmapped<S: Into<String>, L: Into<String>>(shape: S, location: L) -> Self {
        Self::UnmappedTypeShape {
            shape: shape.into(),
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GenerationError::dangling("#/definitions/Missing");
        assert_eq!(
            err.to_string(),
            "Dangling reference '#/definitions/Missing': no matching definition"
        );

        let err = GenerationError::unmapped("array<array<string>>", "definition 'Grid', property 'cells'");
        assert_eq!(
            err.to_string(),
            "Unsupported type shape array<array<string>> at definition 'Grid', property 'cells'"
        );

        let err = GenerationError::malformed("'paths' must be an object");
        assert_eq!(err.to_string(), "Malformed input: 'paths' must be an object");
    }
}
