//! Swagger 2.0 document parser
//!
//! Converts a decoded JSON document into the [`ApiSpec`] schema model. The
//! parser only checks what generation needs: that the keys it reads have
//! the right JSON types. Whether a type shape can be generated is decided
//! later by the type mapper, and `$ref` targets are resolved at render time.

use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

use crate::generation::GenerationError;
use crate::infrastructure::openapi::{
    ApiSpec, Definition, HttpMethod, Operation, Parameter, ParameterLocation, Property,
    SecurityRequirement, SecuritySchemeType, TypeDescriptor,
};

/// Parser over the raw JSON value of a Swagger document
pub struct OpenApiParser {
    /// The raw JSON value of the document
    pub json: JsonValue,
}

impl OpenApiParser {
    /// Create a new parser from decoded content
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the complete document into the schema model
    pub fn parse(&self) -> Result<ApiSpec, GenerationError> {
        let root = self
            .json
            .as_object()
            .ok_or_else(|| GenerationError::malformed("document root must be an object"))?;

        let version = optional_str(root, "swagger", "document")?;
        let title = root
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(JsonValue::as_str)
            .map(String::from);

        let definitions = self.parse_definitions(root)?;
        let security_definitions = self.parse_security_definitions(root)?;
        let operations = self.parse_operations(root)?;

        debug!(
            definitions = definitions.len(),
            operations = operations.len(),
            "Parsed API description"
        );

        Ok(ApiSpec {
            version,
            title,
            definitions,
            operations,
            security_definitions,
        })
    }

    fn parse_definitions(
        &self,
        root: &JsonMap<String, JsonValue>,
    ) -> Result<IndexMap<String, Definition>, GenerationError> {
        let Some(definitions) = optional_object(root, "definitions", "document")? else {
            return Ok(IndexMap::new());
        };

        definitions
            .iter()
            .map(|(name, value)| {
                let location = format!("definition '{name}'");
                let definition = value.as_object().ok_or_else(|| {
                    GenerationError::malformed(format!("{location} must be an object"))
                })?;

                let mut properties = IndexMap::new();
                if let Some(props) = optional_object(definition, "properties", &location)? {
                    for (prop_name, prop_value) in props {
                        let prop_location = format!("{location}, property '{prop_name}'");
                        let descriptor = parse_descriptor(prop_value, &prop_location)?;
                        let description = prop_value
                            .as_object()
                            .map(|prop| optional_str(prop, "description", &prop_location))
                            .transpose()?
                            .flatten();
                        let property = Property {
                            descriptor,
                            description,
                        };
                        properties.insert(prop_name.clone(), property);
                    }
                }

                Ok((
                    name.clone(),
                    Definition {
                        name: name.clone(),
                        description: optional_str(definition, "description", &location)?,
                        properties,
                    },
                ))
            })
            .collect()
    }

    fn parse_security_definitions(
        &self,
        root: &JsonMap<String, JsonValue>,
    ) -> Result<IndexMap<String, SecuritySchemeType>, GenerationError> {
        let Some(schemes) = optional_object(root, "securityDefinitions", "document")? else {
            return Ok(IndexMap::new());
        };

        schemes
            .iter()
            .map(|(name, scheme)| {
                let scheme_type = scheme
                    .get("type")
                    .and_then(JsonValue::as_str)
                    .ok_or_else(|| {
                        GenerationError::malformed(format!(
                            "security definition '{name}' is missing a string 'type'"
                        ))
                    })?;
                Ok((name.clone(), SecuritySchemeType::from_type(scheme_type)))
            })
            .collect()
    }

    /// Parse every operation, grouped by path and then by method in document order
    fn parse_operations(
        &self,
        root: &JsonMap<String, JsonValue>,
    ) -> Result<Vec<Operation>, GenerationError> {
        let Some(paths) = optional_object(root, "paths", "document")? else {
            return Ok(Vec::new());
        };
        let global_security = parse_security(root.get("security"), "document")?;

        let mut operations = Vec::new();
        for (path, path_item) in paths {
            let path_item = path_item.as_object().ok_or_else(|| {
                GenerationError::malformed(format!("path '{path}' must be an object"))
            })?;
            let shared_parameters =
                self.parse_parameters(path_item.get("parameters"), &format!("path '{path}'"))?;

            for (key, method_item) in path_item {
                let Some(method) = HttpMethod::from_key(key) else {
                    continue;
                };
                let method_item = method_item.as_object().ok_or_else(|| {
                    GenerationError::malformed(format!("operation {key} {path} must be an object"))
                })?;
                operations.push(self.build_operation(
                    path,
                    method,
                    method_item,
                    &shared_parameters,
                    global_security.as_ref(),
                )?);
            }
        }

        Ok(operations)
    }

    fn build_operation(
        &self,
        path: &str,
        method: HttpMethod,
        method_item: &JsonMap<String, JsonValue>,
        shared_parameters: &[Parameter],
        global_security: Option<&Vec<SecurityRequirement>>,
    ) -> Result<Operation, GenerationError> {
        let location = format!("operation {method} {path}");
        let operation_id = optional_str(method_item, "operationId", &location)?
            .unwrap_or_else(|| derive_operation_id(method, path));

        // Operation-level parameters replace path-level ones with the same name and location
        let own_parameters = self.parse_parameters(method_item.get("parameters"), &location)?;
        let mut parameters: Vec<Parameter> = shared_parameters
            .iter()
            .filter(|shared| {
                !own_parameters
                    .iter()
                    .any(|own| own.name == shared.name && own.location == shared.location)
            })
            .cloned()
            .collect();
        parameters.extend(own_parameters);

        let body_count = parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Body)
            .count();
        if body_count > 1 {
            return Err(GenerationError::malformed(format!(
                "{location} declares {body_count} body parameters, at most one is allowed"
            )));
        }

        let security = match method_item.get("security") {
            Some(value) => parse_security(Some(value), &location)?,
            None => global_security.cloned(),
        };

        Ok(Operation {
            path: path.to_string(),
            method,
            summary: optional_str(method_item, "summary", &location)?,
            description: optional_str(method_item, "description", &location)?,
            success_response: self.parse_success_response(method_item, &location, &operation_id)?,
            operation_id,
            parameters,
            security,
        })
    }

    fn parse_parameters(
        &self,
        value: Option<&JsonValue>,
        location: &str,
    ) -> Result<Vec<Parameter>, GenerationError> {
        let Some(value) = value else {
            return Ok(Vec::new());
        };
        let params = value.as_array().ok_or_else(|| {
            GenerationError::malformed(format!("{location}: 'parameters' must be an array"))
        })?;

        params
            .iter()
            .map(|param| match param.get("$ref").and_then(JsonValue::as_str) {
                Some(reference) => {
                    let target = self.resolve_local(reference)?;
                    parse_parameter(target, location)
                }
                None => parse_parameter(param, location),
            })
            .collect()
    }

    /// Reads the `$ref` of the `200` response schema
    fn parse_success_response(
        &self,
        method_item: &JsonMap<String, JsonValue>,
        location: &str,
        operation_id: &str,
    ) -> Result<Option<String>, GenerationError> {
        let Some(responses) = optional_object(method_item, "responses", location)? else {
            return Ok(None);
        };
        for status in responses.keys().filter(|status| status.as_str() != "200") {
            debug!(operation = %operation_id, %status, "Ignoring non-200 response");
        }
        let Some(mut ok) = responses.get("200") else {
            return Ok(None);
        };
        if let Some(reference) = ok.get("$ref").and_then(JsonValue::as_str) {
            ok = self.resolve_local(reference)?;
        }
        let Some(schema) = ok.get("schema") else {
            return Ok(None);
        };

        let response_location = format!("{location}, response 200");
        match parse_descriptor(schema, &response_location)? {
            TypeDescriptor::Ref(reference) => Ok(Some(reference)),
            other => Err(GenerationError::unmapped(other.to_string(), response_location)),
        }
    }

    /// Resolves a local JSON pointer such as `#/parameters/limit`
    fn resolve_local(&self, reference: &str) -> Result<&JsonValue, GenerationError> {
        reference
            .strip_prefix('#')
            .and_then(|pointer| self.json.pointer(pointer))
            .ok_or_else(|| GenerationError::dangling(reference))
    }
}

fn parse_parameter(param: &JsonValue, location: &str) -> Result<Parameter, GenerationError> {
    let param = param.as_object().ok_or_else(|| {
        GenerationError::malformed(format!("{location}: parameter must be an object"))
    })?;
    let name = param
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| GenerationError::malformed(format!("{location}: parameter missing name")))?
        .to_string();
    let param_location = format!("{location}, parameter '{name}'");

    let location_kind = match param.get("in").and_then(JsonValue::as_str) {
        Some("path") => ParameterLocation::Path,
        Some("query") => ParameterLocation::Query,
        Some("body") => ParameterLocation::Body,
        Some(other) => {
            return Err(GenerationError::malformed(format!(
                "{param_location}: unsupported location '{other}'"
            )));
        }
        None => {
            return Err(GenerationError::malformed(format!(
                "{param_location}: missing 'in'"
            )));
        }
    };

    let required = match param.get("required") {
        None => false,
        Some(value) => value.as_bool().ok_or_else(|| {
            GenerationError::malformed(format!("{param_location}: 'required' must be a boolean"))
        })?,
    };

    let descriptor = if location_kind == ParameterLocation::Body {
        let schema = param.get("schema").ok_or_else(|| {
            GenerationError::malformed(format!("{param_location}: body parameter missing schema"))
        })?;
        parse_descriptor(schema, &param_location)?
    } else {
        parse_descriptor(&JsonValue::Object(param.clone()), &param_location)?
    };

    Ok(Parameter {
        name,
        location: location_kind,
        required,
        descriptor,
        description: optional_str(param, "description", &param_location)?,
    })
}

/// Parses the type descriptor of a schema-like object
pub fn parse_descriptor(value: &JsonValue, location: &str) -> Result<TypeDescriptor, GenerationError> {
    let schema = value
        .as_object()
        .ok_or_else(|| GenerationError::malformed(format!("{location}: schema must be an object")))?;

    if let Some(reference) = schema.get("$ref") {
        let reference = reference.as_str().ok_or_else(|| {
            GenerationError::malformed(format!("{location}: '$ref' must be a string"))
        })?;
        return Ok(TypeDescriptor::Ref(reference.to_string()));
    }

    let type_tag = match schema.get("type") {
        Some(JsonValue::String(tag)) => tag.as_str(),
        Some(_) => {
            return Err(GenerationError::malformed(format!(
                "{location}: 'type' must be a string"
            )));
        }
        None if schema.contains_key("properties") => return Ok(TypeDescriptor::Object),
        None => {
            return Err(GenerationError::malformed(format!(
                "{location}: missing 'type' or '$ref'"
            )));
        }
    };

    match type_tag {
        "integer" => Ok(TypeDescriptor::Integer),
        "number" => Ok(TypeDescriptor::Number),
        "boolean" => Ok(TypeDescriptor::Boolean),
        "string" => Ok(TypeDescriptor::String),
        "array" => {
            let items = schema.get("items").ok_or_else(|| {
                GenerationError::malformed(format!("{location}: array without 'items'"))
            })?;
            let items = parse_descriptor(items, &format!("{location} items"))?;
            Ok(TypeDescriptor::Array(Box::new(items)))
        }
        "object" => match schema.get("additionalProperties") {
            Some(values @ JsonValue::Object(_)) => {
                let values = parse_descriptor(values, &format!("{location} values"))?;
                Ok(TypeDescriptor::Map(Box::new(values)))
            }
            _ => Ok(TypeDescriptor::Object),
        },
        other => Err(GenerationError::malformed(format!(
            "{location}: unknown type '{other}'"
        ))),
    }
}

fn parse_security(
    value: Option<&JsonValue>,
    location: &str,
) -> Result<Option<Vec<SecurityRequirement>>, GenerationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let invalid = || {
        GenerationError::malformed(format!(
            "{location}: 'security' must be a list of scheme-to-scopes objects"
        ))
    };

    let alternatives = value.as_array().ok_or_else(invalid)?;
    alternatives
        .iter()
        .map(|alternative| {
            let alternative = alternative.as_object().ok_or_else(invalid)?;
            alternative
                .iter()
                .map(|(scheme, scopes)| {
                    let scopes = scopes
                        .as_array()
                        .ok_or_else(invalid)?
                        .iter()
                        .filter_map(JsonValue::as_str)
                        .map(String::from)
                        .collect();
                    Ok((scheme.clone(), scopes))
                })
                .collect::<Result<SecurityRequirement, _>>()
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Builds an identifier such as `get_v2_friends_id` for operations without `operationId`
fn derive_operation_id(method: HttpMethod, path: &str) -> String {
    let path: String = path
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let path = path.trim_matches('_');
    if path.is_empty() {
        method.to_string()
    } else {
        format!("{method}_{path}")
    }
}

fn optional_object<'a>(
    map: &'a JsonMap<String, JsonValue>,
    key: &str,
    location: &str,
) -> Result<Option<&'a JsonMap<String, JsonValue>>, GenerationError> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Object(object)) => Ok(Some(object)),
        Some(_) => Err(GenerationError::malformed(format!(
            "{location}: '{key}' must be an object"
        ))),
    }
}

fn optional_str(
    map: &JsonMap<String, JsonValue>,
    key: &str,
    location: &str,
) -> Result<Option<String>, GenerationError> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(GenerationError::malformed(format!(
            "{location}: '{key}' must be a string"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(json: JsonValue) -> Result<ApiSpec, GenerationError> {
        OpenApiParser::new(json).parse()
    }

    #[test]
    fn test_parse_definitions_preserve_order() {
        let spec = parse(json!({
            "swagger": "2.0",
            "definitions": {
                "zebra": { "properties": { "z_last": { "type": "string" } } },
                "apple": {
                    "description": "A fruit",
                    "properties": {
                        "b_second": { "type": "integer" },
                        "a_first": { "type": "boolean" }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(spec.version.as_deref(), Some("2.0"));
        let names: Vec<_> = spec.definitions.keys().cloned().collect();
        assert_eq!(names, vec!["zebra", "apple"]);

        let apple = &spec.definitions["apple"];
        assert_eq!(apple.description.as_deref(), Some("A fruit"));
        let props: Vec<_> = apple.properties.keys().cloned().collect();
        assert_eq!(props, vec!["b_second", "a_first"]);
        assert_eq!(apple.properties["b_second"].descriptor, TypeDescriptor::Integer);
    }

    #[test]
    fn test_parse_descriptor_shapes() {
        let loc = "test";
        assert_eq!(
            parse_descriptor(&json!({ "type": "array", "items": { "$ref": "#/definitions/Friend" } }), loc)
                .unwrap(),
            TypeDescriptor::Array(Box::new(TypeDescriptor::Ref("#/definitions/Friend".to_string())))
        );
        assert_eq!(
            parse_descriptor(&json!({ "type": "object", "additionalProperties": { "type": "string" } }), loc)
                .unwrap(),
            TypeDescriptor::Map(Box::new(TypeDescriptor::String))
        );
        assert_eq!(
            parse_descriptor(&json!({ "type": "object" }), loc).unwrap(),
            TypeDescriptor::Object
        );
        assert_eq!(
            parse_descriptor(&json!({ "type": "string", "format": "date-time" }), loc).unwrap(),
            TypeDescriptor::String
        );
        assert_eq!(
            parse_descriptor(&json!({ "type": "array", "items": { "type": "array", "items": { "type": "integer" } } }), loc)
                .unwrap()
                .to_string(),
            "array<array<integer>>"
        );
    }

    #[test]
    fn test_parse_descriptor_rejects_malformed() {
        let loc = "definition 'Bad', property 'p'";
        assert!(matches!(
            parse_descriptor(&json!({ "type": "array" }), loc),
            Err(GenerationError::InputMalformed(_))
        ));
        assert!(matches!(
            parse_descriptor(&json!({ "type": 7 }), loc),
            Err(GenerationError::InputMalformed(_))
        ));
        assert!(matches!(
            parse_descriptor(&json!({ "type": "tuple" }), loc),
            Err(GenerationError::InputMalformed(_))
        ));
        assert!(matches!(
            parse_descriptor(&json!({ "format": "int64" }), loc),
            Err(GenerationError::InputMalformed(_))
        ));
    }

    #[test]
    fn test_parse_operations() {
        let spec = parse(json!({
            "paths": {
                "/v2/friends/{id}": {
                    "parameters": [
                        { "name": "id", "in": "path", "required": true, "type": "string" }
                    ],
                    "get": {
                        "summary": "Fetch a friend.",
                        "operationId": "GetFriend",
                        "parameters": [
                            { "name": "expand", "in": "query", "type": "array", "items": { "type": "string" } }
                        ],
                        "responses": {
                            "200": { "schema": { "$ref": "#/definitions/Friend" } },
                            "404": { "description": "missing" }
                        }
                    },
                    "delete": {
                        "responses": { "200": { "description": "gone" } }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(spec.operations.len(), 2);
        let get = &spec.operations[0];
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.operation_id, "GetFriend");
        assert_eq!(get.summary.as_deref(), Some("Fetch a friend."));
        assert_eq!(get.success_response.as_deref(), Some("#/definitions/Friend"));
        let names: Vec<_> = get.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "expand"]);
        assert!(get.parameters[0].required);
        assert_eq!(get.parameters[0].location, ParameterLocation::Path);
        assert!(get.security.is_none());

        let delete = &spec.operations[1];
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.operation_id, "delete_v2_friends_id");
        assert!(delete.success_response.is_none());
        assert_eq!(delete.parameters.len(), 1);
    }

    #[test]
    fn test_operation_parameter_overrides_path_parameter() {
        let spec = parse(json!({
            "paths": {
                "/items/{id}": {
                    "parameters": [{ "name": "id", "in": "path", "required": true, "type": "string" }],
                    "put": {
                        "operationId": "PutItem",
                        "parameters": [
                            { "name": "id", "in": "path", "required": true, "type": "integer" }
                        ]
                    }
                }
            }
        }))
        .unwrap();

        let params = &spec.operations[0].parameters;
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].descriptor, TypeDescriptor::Integer);
    }

    #[test]
    fn test_parse_body_and_parameter_refs() {
        let spec = parse(json!({
            "parameters": {
                "limitParam": { "name": "limit", "in": "query", "type": "integer" }
            },
            "paths": {
                "/v2/account": {
                    "put": {
                        "operationId": "UpdateAccount",
                        "parameters": [
                            { "$ref": "#/parameters/limitParam" },
                            { "name": "body", "in": "body", "required": true, "schema": { "$ref": "#/definitions/UpdateAccountRequest" } }
                        ]
                    }
                }
            }
        }))
        .unwrap();

        let op = &spec.operations[0];
        assert_eq!(op.parameters[0].name, "limit");
        assert_eq!(op.parameters[0].descriptor, TypeDescriptor::Integer);
        let body = op
            .parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Body)
            .unwrap();
        assert_eq!(
            body.descriptor,
            TypeDescriptor::Ref("#/definitions/UpdateAccountRequest".to_string())
        );
    }

    #[test]
    fn test_missing_parameter_ref_is_dangling() {
        let result = parse(json!({
            "paths": { "/x": { "get": { "parameters": [{ "$ref": "#/parameters/nope" }] } } }
        }));
        assert!(matches!(result, Err(GenerationError::DanglingReference { .. })));
    }

    #[test]
    fn test_rejects_unsupported_parameter_location() {
        let result = parse(json!({
            "paths": { "/x": { "get": { "parameters": [{ "name": "X-Trace", "in": "header", "type": "string" }] } } }
        }));
        match result {
            Err(GenerationError::InputMalformed(message)) => {
                assert!(message.contains("unsupported location 'header'"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_multiple_body_parameters() {
        let result = parse(json!({
            "paths": { "/x": { "post": { "parameters": [
                { "name": "a", "in": "body", "schema": { "type": "string" } },
                { "name": "b", "in": "body", "schema": { "type": "string" } }
            ] } } }
        }));
        assert!(matches!(result, Err(GenerationError::InputMalformed(_))));
    }

    #[test]
    fn test_non_ref_success_response_is_unmapped() {
        let result = parse(json!({
            "paths": { "/x": { "get": { "responses": {
                "200": { "schema": { "type": "array", "items": { "type": "string" } } }
            } } } }
        }));
        assert!(matches!(result, Err(GenerationError::UnmappedTypeShape { .. })));
    }

    #[test]
    fn test_success_response_ref() {
        let spec = parse(json!({
            "responses": {
                "FriendResponse": {
                    "description": "A friend.",
                    "schema": { "$ref": "#/definitions/Friend" }
                }
            },
            "paths": {
                "/v2/friends/{id}": {
                    "get": {
                        "operationId": "GetFriend",
                        "responses": {
                            "200": { "$ref": "#/responses/FriendResponse" },
                            "404": { "description": "Not found." }
                        }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(
            spec.operations[0].success_response.as_deref(),
            Some("#/definitions/Friend")
        );
    }

    #[test]
    fn test_missing_response_ref_is_dangling() {
        let result = parse(json!({
            "paths": {
                "/v2/friends": {
                    "get": {
                        "responses": { "200": { "$ref": "#/responses/Missing" } }
                    }
                }
            }
        }));

        match result {
            Err(GenerationError::DanglingReference { reference }) => {
                assert_eq!(reference, "#/responses/Missing");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_empty_operation_security_is_kept() {
        let spec = parse(json!({
            "security": [ { "BasicAuth": [] } ],
            "paths": {
                "/v2/account": {
                    "get": {},
                    "delete": { "security": [] }
                }
            }
        }))
        .unwrap();

        assert_eq!(spec.operations[0].security.as_ref().map(Vec::len), Some(1));
        assert_eq!(spec.operations[1].security, Some(vec![]));
    }

    #[test]
    fn test_parse_security() {
        let spec = parse(json!({
            "securityDefinitions": {
                "BasicAuth": { "type": "basic" },
                "HttpKeyAuth": { "type": "apiKey", "name": "Authorization", "in": "header" }
            },
            "security": [{ "HttpKeyAuth": [] }],
            "paths": {
                "/login": { "post": { "security": [{ "BasicAuth": [] }, { "HttpKeyAuth": [] }] } },
                "/me": { "get": {} }
            }
        }))
        .unwrap();

        assert_eq!(spec.security_definitions["BasicAuth"], SecuritySchemeType::Basic);
        assert_eq!(spec.security_definitions["HttpKeyAuth"], SecuritySchemeType::ApiKey);

        let login = spec.operations[0].security.as_ref().unwrap();
        assert_eq!(login.len(), 2);
        assert!(login[0].contains_key("BasicAuth"));

        // Operations without their own list inherit the document-level one
        let me = spec.operations[1].security.as_ref().unwrap();
        assert!(me[0].contains_key("HttpKeyAuth"));
    }

    #[test]
    fn test_rejects_wrong_json_types() {
        assert!(matches!(parse(json!([])), Err(GenerationError::InputMalformed(_))));
        assert!(matches!(
            parse(json!({ "paths": [] })),
            Err(GenerationError::InputMalformed(_))
        ));
        assert!(matches!(
            parse(json!({ "definitions": { "A": { "description": 5 } } })),
            Err(GenerationError::InputMalformed(_))
        ));
        assert!(matches!(
            parse(json!({ "paths": { "/x": { "get": { "parameters": [
                { "name": "q", "in": "query", "type": "string", "required": "yes" }
            ] } } } })),
            Err(GenerationError::InputMalformed(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let spec = parse(json!({})).unwrap();
        assert!(spec.definitions.is_empty());
        assert!(spec.operations.is_empty());
        assert!(spec.version.is_none());
    }
}
