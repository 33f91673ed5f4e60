//! Whole-input parse strategy.

use serde_json::Value;

use super::Strategy;

/// Parses the entire trimmed input as one JSON value.
///
/// The fastest path: it succeeds only when the response is pure JSON with
/// no surrounding noise.
///
/// # Examples
///
/// ```
/// use jsonsieve::pipeline::strategies::{DirectParse, Strategy};
///
/// let value = DirectParse.attempt(r#"  {"name": "Alice"}  "#).unwrap();
/// assert_eq!(value["name"], "Alice");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectParse;

impl Strategy for DirectParse {
    #[inline]
    fn name(&self) -> &'static str {
        "direct_parse"
    }

    fn attempt(&self, input: &str) -> Option<Value> {
        serde_json::from_str(input.trim()).ok()
    }

    #[inline]
    fn priority(&self) -> u8 {
        1
    }
}
