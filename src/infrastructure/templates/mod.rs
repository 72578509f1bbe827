//! Templates embedded into the binary

/// Tera template of the generated C# client unit
pub const CSHARP_CLIENT_TEMPLATE: &str =
    include_str!("../../../templates/csharp/api_client.cs.tera");

/// Name the template is registered under when rendering
pub const CSHARP_CLIENT_TEMPLATE_NAME: &str = "api_client.cs";
