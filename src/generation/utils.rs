//! Identifier transformations for code generation
//!
//! The input document names things in snake_case; generated code needs
//! initial-uppercase type names and two camel casings for members. Every
//! generated identifier goes through these functions so that the same raw
//! name always maps to the same identifier across the whole output.

use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Casing applied to the first character by [`to_field_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Initial lowercase, e.g. `userId`. Used for arguments and locals.
    Field,
    /// Initial uppercase, e.g. `UserId`. Used for accessors and method names.
    Type,
}

/// Converts a definition key into a type name by uppercasing its first character.
///
/// # Examples
/// ```
/// use restgen::generation::utils::to_type_name;
///
/// assert_eq!(to_type_name("friend"), "Friend");
/// assert_eq!(to_type_name("ApiAccount"), "ApiAccount");
/// ```
pub fn to_type_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a snake_case name into camelCase or PascalCase.
///
/// Underscores are removed and the character following each one is
/// uppercased; the first character of the result is then lowercased for
/// [`CaseStyle::Field`] and uppercased for [`CaseStyle::Type`]. Input that
/// has no underscores and already has the requested first-letter case is
/// returned unchanged.
///
/// # Examples
/// ```
/// use restgen::generation::utils::{CaseStyle, to_field_name};
///
/// assert_eq!(to_field_name("user_id", CaseStyle::Type), "UserId");
/// assert_eq!(to_field_name("user_id", CaseStyle::Field), "userId");
/// assert_eq!(to_field_name("UserId", CaseStyle::Type), "UserId");
/// ```
pub fn to_field_name(raw: &str, style: CaseStyle) -> String {
    let mut joined = String::with_capacity(raw.len());
    let mut upper_next = false;

    for ch in raw.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            joined.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            joined.push(ch);
        }
    }

    let mut chars = joined.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let head: String = match style {
                CaseStyle::Field => first.to_lowercase().collect(),
                CaseStyle::Type => first.to_uppercase().collect(),
            };
            head + chars.as_str()
        }
    }
}

/// Converts a document name into a C# identifier in the requested casing.
///
/// Characters that cannot appear in an identifier separate words the same
/// way `_` does, then [`to_field_name`] applies. Returns `None` when nothing
/// usable remains, e.g. for an empty name or one starting with a digit.
///
/// # Examples
/// ```
/// use restgen::generation::utils::{CaseStyle, to_identifier};
///
/// assert_eq!(to_identifier("user-id", CaseStyle::Type).as_deref(), Some("UserId"));
/// assert_eq!(to_identifier("account.id", CaseStyle::Field).as_deref(), Some("accountId"));
/// assert_eq!(to_identifier("9lives", CaseStyle::Type), None);
/// ```
pub fn to_identifier(raw: &str, style: CaseStyle) -> Option<String> {
    let separated: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    Some(to_field_name(&separated, style)).filter(|name| is_identifier(name))
}

/// Whether `value` is a plain (non-verbatim) C# identifier
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

/// Reserved C# keywords that cannot be used as plain identifiers.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Local variable names used inside every generated operation body.
const OPERATION_LOCALS: &[&str] = &[
    "urlpath",
    "queryParams",
    "uri",
    "method",
    "headers",
    "header",
    "credentials",
    "content",
    "contents",
    "jsonBody",
    "elem",
    "basicAuthUsername",
    "basicAuthPassword",
    "bearerToken",
];

/// Sanitizes a camelCase name for use as a C# method argument.
///
/// Keywords are verbatim-prefixed with `@`, and names that would shadow a
/// local of the generated method body get a `Param` suffix.
///
/// # Examples
/// ```
/// use restgen::generation::utils::sanitize_csharp_argument;
///
/// assert_eq!(sanitize_csharp_argument("event"), "@event");
/// assert_eq!(sanitize_csharp_argument("headers"), "headersParam");
/// assert_eq!(sanitize_csharp_argument("userId"), "userId");
/// ```
pub fn sanitize_csharp_argument(name: &str) -> String {
    if CSHARP_KEYWORDS.contains(&name) {
        format!("@{name}")
    } else if OPERATION_LOCALS.contains(&name) {
        format!("{name}Param")
    } else {
        name.to_string()
    }
}
