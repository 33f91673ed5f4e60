//! Fenced code-block extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a fenced block with an optional language label on the opening
/// fence. The lazy body match keeps blocks non-overlapping.
static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]*)[ \t\r]*\n(.*?)```").expect("invalid fence regex")
});

/// A fenced block body with its optional language label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence<'a> {
    /// Language tag on the opening fence, if present.
    pub label: Option<&'a str>,
    /// Block body, trimmed of surrounding whitespace.
    pub body: &'a str,
}

impl Fence<'_> {
    /// Returns `true` if the label names JSON (ASCII case-insensitive).
    #[inline]
    pub fn is_json_labeled(&self) -> bool {
        self.label.is_some_and(|label| label.eq_ignore_ascii_case("json"))
    }
}

/// Collects all non-overlapping fenced blocks in order of appearance.
///
/// Bodies are trimmed before being handed to any parse attempt. Labeled and
/// unlabeled fences are both returned; callers filter for the pass they
/// implement.
pub fn fences(input: &str) -> Vec<Fence<'_>> {
    FENCE
        .captures_iter(input)
        .filter_map(|cap| {
            let label = cap.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty());
            let body = cap.get(2)?.as_str().trim();
            Some(Fence { label, body })
        })
        .collect()
}
