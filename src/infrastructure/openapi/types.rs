//! Schema model for Swagger 2.0 API descriptions
//!
//! Only the subset of the document that drives generation is modelled:
//! named definitions with ordered properties, operations with ordered
//! parameters, the success response reference, and security requirements.
//! Every map here is an [`IndexMap`] so document order survives parsing.

use indexmap::IndexMap;
use std::fmt;

/// HTTP methods an operation may be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Parse a lowercase path-item key such as `get`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(HttpMethod::Get),
            "put" => Some(HttpMethod::Put),
            "post" => Some(HttpMethod::Post),
            "delete" => Some(HttpMethod::Delete),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "patch" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type descriptor of a property, parameter or response schema.
///
/// Descriptors are recursive so that the parser can represent whatever the
/// document says; deciding which shapes are generatable is the type
/// mapper's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Integer,
    Number,
    Boolean,
    String,
    /// `type: array` with its `items` descriptor
    Array(Box<TypeDescriptor>),
    /// `type: object` keyed by string, with its `additionalProperties` descriptor
    Map(Box<TypeDescriptor>),
    /// `type: object` without a value schema, or an inline `properties` object
    Object,
    /// `$ref` pointer, kept verbatim
    Ref(String),
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Integer => write!(f, "integer"),
            TypeDescriptor::Number => write!(f, "number"),
            TypeDescriptor::Boolean => write!(f, "boolean"),
            TypeDescriptor::String => write!(f, "string"),
            TypeDescriptor::Array(items) => write!(f, "array<{items}>"),
            TypeDescriptor::Map(values) => write!(f, "map<string, {values}>"),
            TypeDescriptor::Object => write!(f, "object"),
            TypeDescriptor::Ref(reference) => write!(f, "ref({reference})"),
        }
    }
}

/// A property of a definition
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub descriptor: TypeDescriptor,
    pub description: Option<String>,
}

/// A named data type of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// The raw document key
    pub name: String,
    pub description: Option<String>,
    /// Wire name to property, in document order
    pub properties: IndexMap<String, Property>,
}

/// Where a parameter travels in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Body => write!(f, "body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub descriptor: TypeDescriptor,
    pub description: Option<String>,
}

/// One alternative of an operation's `security` list: scheme name to scopes
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// `type` of an entry in `securityDefinitions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecuritySchemeType {
    Basic,
    ApiKey,
    OAuth2,
    Other(String),
}

impl SecuritySchemeType {
    pub fn from_type(value: &str) -> Self {
        match value {
            "basic" => SecuritySchemeType::Basic,
            "apiKey" => SecuritySchemeType::ApiKey,
            "oauth2" => SecuritySchemeType::OAuth2,
            other => SecuritySchemeType::Other(other.to_string()),
        }
    }
}

/// One HTTP method bound to one URL template
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// URL template with `{param}` placeholders
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Path-level parameters first, then the operation's own, in document order
    pub parameters: Vec<Parameter>,
    /// `$ref` of the `200` response schema
    pub success_response: Option<String>,
    /// Security alternatives in document order; `None` when the key is absent
    pub security: Option<Vec<SecurityRequirement>>,
}

/// The parsed API description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiSpec {
    /// Value of the top-level `swagger` key, when present
    pub version: Option<String>,
    pub title: Option<String>,
    /// Definitions keyed by their raw document name, in document order
    pub definitions: IndexMap<String, Definition>,
    /// Operations grouped by path, then by method, in document order
    pub operations: Vec<Operation>,
    pub security_definitions: IndexMap<String, SecuritySchemeType>,
}
