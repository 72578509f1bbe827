//! Generated type shapes and the type mapper
//!
//! [`TypeMapper::map`] is the single place that decides which schema shapes
//! can be generated. It is total over [`TypeDescriptor`]: every descriptor
//! either maps to one [`GeneratedType`] or fails with
//! [`GenerationError::UnmappedTypeShape`].

use tracing::{debug, warn};

use crate::generation::{GenerationError, ReferenceResolver};
use crate::infrastructure::openapi::{ApiSpec, Operation, SecuritySchemeType, TypeDescriptor};

/// Scalar types the generated code supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Integer,
    Boolean,
    String,
}

impl Primitive {
    fn from_descriptor(descriptor: &TypeDescriptor) -> Option<Self> {
        match descriptor {
            TypeDescriptor::Integer => Some(Primitive::Integer),
            TypeDescriptor::Boolean => Some(Primitive::Boolean),
            TypeDescriptor::String => Some(Primitive::String),
            _ => None,
        }
    }
}

/// The closed set of shapes the generator can emit.
///
/// Reference variants carry the resolved type name of the definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedType {
    Scalar(Primitive),
    List(Primitive),
    RefList(String),
    Map(Primitive),
    RefMap(String),
    Ref(String),
}

impl GeneratedType {
    pub fn as_scalar(&self) -> Option<Primitive> {
        match self {
            GeneratedType::Scalar(primitive) => Some(*primitive),
            _ => None,
        }
    }
}

/// Maps schema descriptors to generated types
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    resolver: ReferenceResolver<'a>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(resolver: ReferenceResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn for_spec(spec: &'a ApiSpec) -> Self {
        Self::new(ReferenceResolver::new(&spec.definitions))
    }

    /// Decides the generated type of a descriptor found at `location`
    pub fn map(
        &self,
        descriptor: &TypeDescriptor,
        location: &str,
    ) -> Result<GeneratedType, GenerationError> {
        let unmapped = || GenerationError::unmapped(descriptor.to_string(), location);

        match descriptor {
            TypeDescriptor::Integer => Ok(GeneratedType::Scalar(Primitive::Integer)),
            TypeDescriptor::Boolean => Ok(GeneratedType::Scalar(Primitive::Boolean)),
            TypeDescriptor::String => Ok(GeneratedType::Scalar(Primitive::String)),
            TypeDescriptor::Ref(reference) => Ok(GeneratedType::Ref(self.resolver.resolve(reference)?)),
            TypeDescriptor::Array(items) => match items.as_ref() {
                TypeDescriptor::Ref(reference) => {
                    Ok(GeneratedType::RefList(self.resolver.resolve(reference)?))
                }
                other => Primitive::from_descriptor(other)
                    .map(GeneratedType::List)
                    .ok_or_else(unmapped),
            },
            TypeDescriptor::Map(values) => match values.as_ref() {
                TypeDescriptor::Ref(reference) => {
                    Ok(GeneratedType::RefMap(self.resolver.resolve(reference)?))
                }
                other => Primitive::from_descriptor(other)
                    .map(GeneratedType::Map)
                    .ok_or_else(unmapped),
            },
            TypeDescriptor::Number | TypeDescriptor::Object => Err(unmapped()),
        }
    }
}

/// Credential a generated operation asks its caller for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// Username and password, always sent as a `Basic` header
    BasicAuth,
    /// A token sent as a `Bearer` header only when non-empty
    BearerToken,
    /// No security declared: a token sent as a `Bearer` header unconditionally
    DefaultBearer,
}

impl Credential {
    /// Derives the credential from the first scheme of the first security alternative
    pub fn for_operation(operation: &Operation, spec: &ApiSpec) -> Self {
        let Some(alternatives) = operation.security.as_deref() else {
            return Credential::DefaultBearer;
        };
        let Some(first) = alternatives.first() else {
            return Credential::DefaultBearer;
        };
        if alternatives.len() > 1 {
            debug!(
                operation = %operation.operation_id,
                ignored = alternatives.len() - 1,
                "Ignoring later security alternatives"
            );
        }

        let mut schemes = first.keys();
        let Some(scheme) = schemes.next() else {
            return Credential::DefaultBearer;
        };
        for ignored in schemes {
            warn!(
                operation = %operation.operation_id,
                scheme = %ignored,
                "Ignoring additional security scheme in the first alternative"
            );
        }

        match spec.security_definitions.get(scheme) {
            Some(SecuritySchemeType::Basic) => Credential::BasicAuth,
            Some(_) => Credential::BearerToken,
            None if scheme.to_ascii_lowercase().contains("basic") => Credential::BasicAuth,
            None => Credential::BearerToken,
        }
    }
}
