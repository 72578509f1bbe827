//! `$ref` resolution against the document's definitions

use indexmap::IndexMap;

use crate::generation::GenerationError;
use crate::generation::utils::to_type_name;
use crate::infrastructure::openapi::Definition;

/// Prefix every resolvable definition pointer starts with
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Resolves `#/definitions/<Name>` pointers to generated type names
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    definitions: &'a IndexMap<String, Definition>,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(definitions: &'a IndexMap<String, Definition>) -> Self {
        Self { definitions }
    }

    /// Returns the type name of the referenced definition.
    ///
    /// Fails with [`GenerationError::DanglingReference`] when the pointer does
    /// not start with [`DEFINITIONS_PREFIX`] or names an unknown definition.
    pub fn resolve(&self, reference: &str) -> Result<String, GenerationError> {
        let name = reference
            .strip_prefix(DEFINITIONS_PREFIX)
            .filter(|name| self.definitions.contains_key(*name))
            .ok_or_else(|| GenerationError::dangling(reference))?;
        Ok(to_type_name(name))
    }
}
