//! Heuristic cleanup for common LLM formatting defects.
//!
//! The cleaner rewrites text to raise the odds of a successful parse. It is
//! lossy and best-effort: its output is only ever evaluated by re-attempting
//! a parse, never assumed correct.

use once_cell::sync::Lazy;
use regex::Regex;

/// Narrative prefixes models put in front of a payload.
const NARRATIVE_PREFIXES: &[&str] = &[
    "here's the json:",
    "here is the json:",
    "json output:",
    "output:",
    "result:",
];

/// Trailing comma immediately before a closing brace or bracket.
static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("invalid trailing comma regex"));

/// Normalizes common formatting defects in model output.
///
/// Applied in order: strip one known narrative prefix (ASCII
/// case-insensitive exact-prefix match), remove `//` line comments, then
/// drop trailing commas before `}` or `]`. Comments go first so a comma
/// they leave dangling still gets removed.
pub fn clean(input: &str) -> String {
    let mut text = input.trim();

    for prefix in NARRATIVE_PREFIXES {
        if let Some(head) = text.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                text = text[prefix.len()..].trim_start();
                break;
            }
        }
    }

    let without_comments = strip_line_comments(text);
    TRAILING_COMMA.replace_all(&without_comments, "$1").into_owned()
}

/// Removes `//` comments through end of line.
///
/// String contents are left untouched, so URLs like `"http://x"` inside a
/// value survive.
fn strip_line_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            out.push(ch);
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                // Drop everything through end of line, keeping the newline.
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_narrative_prefix() {
        assert_eq!(clean(r#"Output: {"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(clean(r#"Result: {"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_prefix_case_insensitive() {
        assert_eq!(clean(r#"HERE'S THE JSON: {"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(clean(r#"here is the json: {"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_prefix_must_be_exact_start() {
        // "output:" in the middle of the text is not a narrative prefix.
        assert_eq!(clean(r#"{"output:": 1}"#), r#"{"output:": 1}"#);
    }

    #[test]
    fn test_trailing_comma_object() {
        assert_eq!(clean(r#"{"a": 1,}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_trailing_comma_array() {
        assert_eq!(clean("[1, 2, 3,]"), "[1, 2, 3]");
    }

    #[test]
    fn test_trailing_comma_across_whitespace() {
        assert_eq!(clean("{\"a\": 1,\n  }"), "{\"a\": 1}");
    }

    #[test]
    fn test_nested_trailing_commas() {
        assert_eq!(
            clean(r#"{"array": [1, 2,], "obj": {"x": 1,}}"#),
            r#"{"array": [1, 2], "obj": {"x": 1}}"#
        );
    }

    #[test]
    fn test_strip_line_comment() {
        assert_eq!(clean("{\"a\": 1 // count\n}"), "{\"a\": 1 \n}");
    }

    #[test]
    fn test_comment_then_dangling_comma() {
        // The comment is removed first, so the comma it exposes is dropped.
        assert_eq!(clean("{\"a\": 1, // note\n}"), "{\"a\": 1}");
    }

    #[test]
    fn test_url_in_string_preserved() {
        assert_eq!(
            clean(r#"{"url": "http://example.com"}"#),
            r#"{"url": "http://example.com"}"#
        );
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(clean("{\"a\": 1}\n// done"), "{\"a\": 1}\n");
    }

    #[test]
    fn test_valid_json_passes_through() {
        let input = r#"{"a": 1, "b": [2, 3]}"#;
        assert_eq!(clean(input), input);
    }

    #[test]
    fn test_all_defects_combined() {
        let cleaned = clean("Output: {\"a\": 1, // note\n \"b\": 2,\n}");
        assert_eq!(cleaned, "{\"a\": 1, \n \"b\": 2\n}");
    }
}
