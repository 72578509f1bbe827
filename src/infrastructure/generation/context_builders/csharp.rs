//! C#-specific context builder for code generation
//!
//! Every decision about the generated source is made here: type spellings,
//! accessor expressions, argument lists and the request-building steps of
//! each operation. The template only lays the results out.

use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use tracing::debug;

use crate::generation::{
    ContextBuilder, Credential, GeneratedType, GenerationContext, GenerationError, Primitive,
    ReferenceResolver, RenderContext, TypeMapper,
    sanitizers::{escape_string_literal, sanitize_doc_comment},
    utils::{CaseStyle, is_identifier, sanitize_csharp_argument, to_identifier, to_type_name},
};
use crate::infrastructure::openapi::{ApiSpec, Definition, Operation, Parameter, ParameterLocation};

/// One definition rendered as an interface plus a class
#[derive(Clone, Debug, Serialize)]
pub struct DefinitionContext {
    pub interface_name: String,
    pub class_name: String,
    pub description: String,
    pub properties: Vec<PropertyContext>,
}

/// One property of a generated class
#[derive(Clone, Debug, Serialize)]
pub struct PropertyContext {
    /// Key used on the wire, escaped for a string literal
    pub wire_name: String,
    pub field_name: String,
    pub description: String,
    pub interface_type: String,
    pub concrete_type: String,
    /// Serialized backing member when the interface exposes a view of it
    pub backing_name: Option<String>,
    pub accessor: Option<String>,
    /// `scalar`, `list` or `map`
    pub display: &'static str,
    pub display_value: String,
    pub map_variable: Option<String>,
}

/// One operation rendered as an async client method
#[derive(Clone, Debug, Serialize)]
pub struct OperationContext {
    pub summary: String,
    pub method_name: String,
    pub http_method: String,
    pub url: String,
    pub return_type: String,
    pub response_class: Option<String>,
    /// `basic`, `bearer` or `default`
    pub credential: &'static str,
    pub arguments: Vec<String>,
    pub required_checks: Vec<RequiredCheck>,
    pub path_substitutions: Vec<PathSubstitution>,
    pub query_params: Vec<QueryParamContext>,
    pub body: Option<BodyContext>,
}

/// Null check of a required argument; `name` is the document name, escaped
#[derive(Clone, Debug, Serialize)]
pub struct RequiredCheck {
    pub arg_name: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct PathSubstitution {
    pub placeholder: String,
    pub value: String,
}

/// A query parameter; `element_type` is set for repeated-key arrays
#[derive(Clone, Debug, Serialize)]
pub struct QueryParamContext {
    pub name: String,
    pub arg_name: String,
    pub element_type: Option<String>,
    pub guarded: bool,
    pub value: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct BodyContext {
    pub arg_name: String,
    pub guarded: bool,
}

/// C#-specific context builder
#[derive(Debug, Default)]
pub struct CSharpContextBuilder;

impl CSharpContextBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ContextBuilder for CSharpContextBuilder {
    fn build(&self, context: &GenerationContext) -> Result<RenderContext, GenerationError> {
        let spec = &context.spec;
        let options = &context.options;
        let mapper = TypeMapper::for_spec(spec);

        // Scaffold types share the namespace with every generated definition
        let mut type_names: HashSet<String> = [
            &options.client_class,
            &options.exception_class,
            &options.http_adapter,
        ]
        .into_iter()
        .cloned()
        .collect();

        let mut definitions = Vec::with_capacity(spec.definitions.len());
        for definition in spec.definitions.values() {
            let definition_context = build_definition_context(definition, &mapper)?;
            for type_name in [
                &definition_context.class_name,
                &definition_context.interface_name,
            ] {
                if !type_names.insert(type_name.clone()) {
                    return Err(GenerationError::malformed(format!(
                        "definition '{}' maps to type '{type_name}' which is already generated",
                        definition.name
                    )));
                }
            }
            definitions.push(definition_context);
        }

        let mut operations = Vec::with_capacity(spec.operations.len());
        let mut method_names = HashSet::new();
        for operation in &spec.operations {
            let operation_context = build_operation_context(operation, spec, &mapper)?;
            if !method_names.insert(operation_context.method_name.clone()) {
                return Err(GenerationError::malformed(format!(
                    "operation '{}' maps to method '{}' which is already generated",
                    operation.operation_id, operation_context.method_name
                )));
            }
            debug!(
                operation = %operation.operation_id,
                method = %operation_context.method_name,
                "Built operation context"
            );
            operations.push(operation_context);
        }

        let mut render_context = RenderContext::new();
        render_context.add_variable("generator_name", json!(options.generator_name));
        render_context.add_variable("namespace", json!(options.namespace));
        render_context.add_variable("client_class", json!(options.client_class));
        render_context.add_variable("exception_class", json!(options.exception_class));
        render_context.add_variable("http_adapter", json!(options.http_adapter));
        render_context.add_variable("json_namespace", json!(options.json_namespace));
        render_context.add_variable("default_timeout", json!(options.default_timeout));
        render_context.add_variable("definitions", serde_json::to_value(&definitions)?);
        render_context.add_variable("operations", serde_json::to_value(&operations)?);

        Ok(render_context)
    }
}

fn csharp_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Integer => "int",
        Primitive::Boolean => "bool",
        Primitive::String => "string",
    }
}

fn is_value_type(primitive: Primitive) -> bool {
    !matches!(primitive, Primitive::String)
}

fn interface_name(type_name: &str) -> String {
    format!("I{type_name}")
}

/// Build the interface and class context of a single definition
fn build_definition_context(
    definition: &Definition,
    mapper: &TypeMapper<'_>,
) -> Result<DefinitionContext, GenerationError> {
    let class_name = to_type_name(&definition.name);
    if !is_identifier(&class_name) {
        return Err(GenerationError::malformed(format!(
            "definition '{}': '{class_name}' is not a valid C# type name",
            definition.name
        )));
    }
    let mut properties = Vec::with_capacity(definition.properties.len());
    let mut field_names = HashSet::new();

    for (wire_name, property) in &definition.properties {
        let location = format!("definition '{}', property '{}'", definition.name, wire_name);
        let generated = mapper.map(&property.descriptor, &location)?;

        let (Some(field_name), Some(camel)) = (
            to_identifier(wire_name, CaseStyle::Type),
            to_identifier(wire_name, CaseStyle::Field),
        ) else {
            return Err(GenerationError::malformed(format!(
                "{location}: no C# identifier can be derived from the name"
            )));
        };
        // `ToString` is the generated override
        if field_name == class_name
            || field_name == "ToString"
            || !field_names.insert(field_name.clone())
        {
            return Err(GenerationError::malformed(format!(
                "{location}: member name '{field_name}' is already used"
            )));
        }
        let backing = format!("_{camel}");

        let mut context = PropertyContext {
            wire_name: escape_string_literal(wire_name),
            field_name: field_name.clone(),
            description: sanitize_doc_comment(property.description.as_deref().unwrap_or_default()),
            interface_type: String::new(),
            concrete_type: String::new(),
            backing_name: None,
            accessor: None,
            display: "scalar",
            display_value: field_name.clone(),
            map_variable: None,
        };

        match generated {
            GeneratedType::Scalar(primitive) => {
                context.interface_type = csharp_primitive(primitive).to_string();
                context.concrete_type = context.interface_type.clone();
            }
            GeneratedType::List(primitive) => {
                let list = format!("List<{}>", csharp_primitive(primitive));
                context.display = "list";
                context.display_value = format!("{field_name} ?? new {list}()");
                context.interface_type = list.clone();
                context.concrete_type = list;
            }
            GeneratedType::RefList(name) => {
                context.interface_type = format!("IEnumerable<{}>", interface_name(&name));
                context.concrete_type = format!("List<{name}>");
                context.accessor = Some(format!("{backing} ?? new List<{name}>(0)"));
                context.backing_name = Some(backing);
                context.display = "list";
            }
            GeneratedType::Map(primitive) => {
                let value = csharp_primitive(primitive);
                context.interface_type = format!("IDictionary<string, {value}>");
                context.concrete_type = format!("Dictionary<string, {value}>");
                context.accessor = Some(format!("{backing} ?? new Dictionary<string, {value}>()"));
                context.backing_name = Some(backing);
                context.display = "map";
                context.map_variable = Some(format!("{camel}MapString"));
            }
            GeneratedType::RefMap(name) => {
                let interface = interface_name(&name);
                context.interface_type = format!("IDictionary<string, {interface}>");
                context.concrete_type = format!("Dictionary<string, {name}>");
                context.accessor = Some(format!(
                    "{backing} == null ? new Dictionary<string, {interface}>() : \
                     {backing}.ToDictionary(kv => kv.Key, kv => ({interface}) kv.Value)"
                ));
                context.backing_name = Some(backing);
                context.display = "map";
                context.map_variable = Some(format!("{camel}MapString"));
            }
            GeneratedType::Ref(name) => {
                context.interface_type = interface_name(&name);
                context.concrete_type = name;
                context.accessor = Some(backing.clone());
                context.backing_name = Some(backing);
            }
        }

        properties.push(context);
    }

    Ok(DefinitionContext {
        interface_name: interface_name(&class_name),
        class_name,
        description: sanitize_doc_comment(definition.description.as_deref().unwrap_or_default()),
        properties,
    })
}

/// Build the method context of a single operation
fn build_operation_context(
    operation: &Operation,
    spec: &ApiSpec,
    mapper: &TypeMapper<'_>,
) -> Result<OperationContext, GenerationError> {
    let operation_label = format!("operation '{}'", operation.operation_id);

    let response_class = operation
        .success_response
        .as_deref()
        .map(|reference| ReferenceResolver::new(&spec.definitions).resolve(reference))
        .transpose()?;

    let return_type = match &response_class {
        Some(name) => format!("Task<{}>", interface_name(name)),
        None => "Task".to_string(),
    };

    let credential = Credential::for_operation(operation, spec);
    let mut arguments = Vec::new();
    let mut argument_names = HashSet::new();
    let credential_label = match credential {
        Credential::BasicAuth => "basic",
        Credential::BearerToken => "bearer",
        Credential::DefaultBearer => "default",
    };
    let credential_arguments: &[&str] = match credential {
        Credential::BasicAuth => &["basicAuthUsername", "basicAuthPassword"],
        Credential::BearerToken | Credential::DefaultBearer => &["bearerToken"],
    };
    for name in credential_arguments {
        argument_names.insert(name.to_string());
        arguments.push(format!("string {name}"));
    }

    let mut required_checks = Vec::new();
    let mut path_substitutions = Vec::new();
    let mut query_params = Vec::new();
    let mut body = None;

    for parameter in &operation.parameters {
        let location = format!("{operation_label}, parameter '{}'", parameter.name);
        let generated = mapper.map(&parameter.descriptor, &location)?;
        let Some(camel) = to_identifier(&parameter.name, CaseStyle::Field) else {
            return Err(GenerationError::malformed(format!(
                "{location}: no C# identifier can be derived from the name"
            )));
        };
        let arg_name = sanitize_csharp_argument(&camel);
        if !argument_names.insert(arg_name.clone()) {
            return Err(GenerationError::malformed(format!(
                "{location}: argument name '{arg_name}' is already used"
            )));
        }

        let argument_type = argument_type(parameter, &generated, &location)?;
        arguments.push(format!("{argument_type} {arg_name}"));

        let non_nullable = parameter.required
            && generated.as_scalar().is_some_and(is_value_type);
        if parameter.required && !non_nullable {
            required_checks.push(RequiredCheck {
                arg_name: arg_name.clone(),
                name: escape_string_literal(&parameter.name),
            });
        }

        match parameter.location {
            ParameterLocation::Path => {
                let Some(primitive) = generated.as_scalar() else {
                    return Err(GenerationError::unmapped(parameter.descriptor.to_string(), location));
                };
                path_substitutions.push(PathSubstitution {
                    placeholder: escape_string_literal(&format!("{{{}}}", parameter.name)),
                    value: format!("Uri.EscapeDataString({})", to_text(primitive, &arg_name)),
                });
            }
            ParameterLocation::Query => {
                let name = escape_string_literal(&parameter.name);
                match generated {
                    GeneratedType::Scalar(primitive) => query_params.push(QueryParamContext {
                        name,
                        value: query_value(primitive, &arg_name),
                        guarded: !non_nullable,
                        element_type: None,
                        arg_name,
                    }),
                    GeneratedType::List(primitive) => query_params.push(QueryParamContext {
                        name,
                        value: query_value(primitive, "elem"),
                        guarded: false,
                        element_type: Some(csharp_primitive(primitive).to_string()),
                        arg_name,
                    }),
                    _ => {
                        return Err(GenerationError::unmapped(
                            parameter.descriptor.to_string(),
                            location,
                        ));
                    }
                }
            }
            ParameterLocation::Body => {
                body = Some(BodyContext {
                    arg_name,
                    guarded: !parameter.required,
                });
            }
        }
    }

    let method_name = to_identifier(&operation.operation_id, CaseStyle::Type)
        .map(|name| format!("{name}Async"))
        .ok_or_else(|| {
            GenerationError::malformed(format!(
                "{operation_label}: no C# method name can be derived from the operation id"
            ))
        })?;

    Ok(OperationContext {
        summary: sanitize_doc_comment(
            operation
                .summary
                .as_deref()
                .or(operation.description.as_deref())
                .unwrap_or_default(),
        ),
        method_name,
        http_method: operation.method.as_str().to_ascii_uppercase(),
        url: escape_string_literal(&operation.path),
        return_type,
        response_class,
        credential: credential_label,
        arguments,
        required_checks,
        path_substitutions,
        query_params,
        body,
    })
}

/// C# type of a method argument
fn argument_type(
    parameter: &Parameter,
    generated: &GeneratedType,
    location: &str,
) -> Result<String, GenerationError> {
    let nullable = |primitive: Primitive| {
        let name = csharp_primitive(primitive);
        if is_value_type(primitive) && !parameter.required {
            format!("{name}?")
        } else {
            name.to_string()
        }
    };

    match (parameter.location, generated) {
        (_, GeneratedType::Scalar(primitive)) => Ok(nullable(*primitive)),
        (ParameterLocation::Query, GeneratedType::List(primitive)) => {
            Ok(format!("IEnumerable<{}>", csharp_primitive(*primitive)))
        }
        (ParameterLocation::Body, GeneratedType::Ref(name)) => Ok(name.clone()),
        _ => Err(GenerationError::unmapped(
            parameter.descriptor.to_string(),
            location,
        )),
    }
}

/// Expression rendering a primitive value as text
fn to_text(primitive: Primitive, expr: &str) -> String {
    match primitive {
        Primitive::Integer => format!("{expr}.ToString()"),
        Primitive::Boolean => format!("{expr}.ToString().ToLower()"),
        Primitive::String => expr.to_string(),
    }
}

/// Expression appended to the query string for one value
fn query_value(primitive: Primitive, expr: &str) -> String {
    match primitive {
        Primitive::Integer => expr.to_string(),
        Primitive::Boolean => format!("{expr}.ToString().ToLower()"),
        Primitive::String => format!("Uri.EscapeDataString({expr})"),
    }
}
