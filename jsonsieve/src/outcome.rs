//! Extraction outcome type.

use serde_json::Value;

/// Result of an extraction attempt.
///
/// An outcome is either a complete, syntactically valid JSON value or an
/// explicit absence signal. A partially recovered or best-guess value is
/// never produced, so `Absent` is distinct from every valid empty structure
/// (`{}`, `[]`, `null`).
///
/// # Examples
///
/// ```
/// use jsonsieve::Outcome;
/// use serde_json::json;
///
/// let outcome = jsonsieve::extract(r#"{"ok": true}"#);
/// assert_eq!(outcome, Outcome::Found(json!({"ok": true})));
///
/// let outcome = jsonsieve::extract("no data here");
/// assert!(outcome.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A complete value was recovered by one of the strategies.
    Found(Value),
    /// No strategy produced a parseable value.
    Absent,
}

impl Outcome {
    /// Returns a reference to the recovered value, if any.
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::Absent => None,
        }
    }

    /// Consumes the outcome, returning the recovered value.
    #[inline]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::Absent => None,
        }
    }

    /// Returns `true` if a value was recovered.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// Returns `true` if no value was recovered.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Outcome::Absent)
    }
}

impl From<Option<Value>> for Outcome {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Outcome::Found(value),
            None => Outcome::Absent,
        }
    }
}

impl From<Outcome> for Option<Value> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_value()
    }
}
