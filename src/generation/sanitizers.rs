//! Text sanitizers for generated C# source
//!
//! Document text ends up in two places of the output: XML doc comments and
//! string literals. Both need their own escaping so that arbitrary input
//! cannot break the generated code.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Sanitizes document text for a single-line `/// <summary>` comment
///
/// This function:
/// - Replaces smart quotes and em-dashes with ASCII equivalents
/// - Collapses newlines and whitespace runs into single spaces
/// - Escapes `&`, `<` and `>` for XML documentation
///
/// # Examples
/// ```
/// use restgen::generation::sanitizers::sanitize_doc_comment;
///
/// let output = sanitize_doc_comment("Fetch a user.\nReturns <User> & more");
/// assert_eq!(output, "Fetch a user. Returns &lt;User&gt; &amp; more");
/// ```
pub fn sanitize_doc_comment(input: &str) -> String {
    let ascii = input
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace('\u{2014}', "-");
    let collapsed = WHITESPACE.replace_all(ascii.trim(), " ");

    collapsed
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for use inside a regular C# string literal
pub fn escape_string_literal(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_doc_comment() {
        // Newlines become spaces
        assert_eq!(
            sanitize_doc_comment("Line one\n\nLine two\n   \nLine three"),
            "Line one Line two Line three"
        );

        // Smart quotes and em-dash
        assert_eq!(
            sanitize_doc_comment("A \u{201C}quoted\u{201D} word\u{2014}really"),
            "A \"quoted\" word-really"
        );

        // XML escaping
        assert_eq!(
            sanitize_doc_comment("List<Friend> & Map<K, V>"),
            "List&lt;Friend&gt; &amp; Map&lt;K, V&gt;"
        );

        assert_eq!(sanitize_doc_comment("   "), "");
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal("/v2/friends/{id}"), "/v2/friends/{id}");
        assert_eq!(escape_string_literal(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string_literal(r"C:\temp"), r"C:\\temp");
        assert_eq!(escape_string_literal("a\nb"), "a\\nb");
    }
}
