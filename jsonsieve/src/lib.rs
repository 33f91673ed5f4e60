//! # jsonsieve
//!
//! Recovers a structured JSON value from messy LLM responses.
//!
//! Model output is unreliable: the payload may be pure JSON, JSON buried in
//! prose, JSON fenced in a labeled or unlabeled code block, or JSON with
//! minor syntax defects like trailing commas and `//` comments. This crate
//! layers recovery strategies over a strict parse so the intended value is
//! recovered whenever possible - and a malformed one is never returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonsieve::{extract, Outcome};
//! use serde_json::json;
//!
//! let response = "Sure! Here is the plan: {\"steps\": [\"draft\", \"review\"]} Let me know!";
//!
//! assert_eq!(
//!     extract(response),
//!     Outcome::Found(json!({"steps": ["draft", "review"]}))
//! );
//!
//! // Text with no recoverable structure yields an explicit absence signal.
//! assert_eq!(extract("I couldn't produce that."), Outcome::Absent);
//! ```
//!
//! ## Strategy order
//!
//! Five strategies run in a fixed order; the first success wins:
//!
//! 1. **DirectParse** - the whole trimmed input
//! 2. **LabeledFence** - every ```` ```json ```` fence body, in order
//! 3. **GenericFence** - any fence body, regardless of label
//! 4. **BalancedScan** - the earliest balanced `{...}` or `[...]` span,
//!    tracked through strings and escapes
//! 5. **CleanAndRetry** - strip narrative prefixes, `//` comments, and
//!    trailing commas, then parse once more
//!
//! Extraction is synchronous, allocation-bounded, and free of I/O; a
//! [`Pipeline`] can be shared across threads without coordination.

pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod registry;

pub use error::ScanError;
pub use outcome::Outcome;
pub use pipeline::Pipeline;

use serde::de::DeserializeOwned;

/// Extracts a structured value from raw model output.
///
/// Runs the full strategy pipeline over `input` and returns the first
/// recovered value, or [`Outcome::Absent`] when nothing parses. Malformed
/// input is an expected condition: this function never panics and never
/// returns an error.
///
/// # Examples
///
/// ```
/// use jsonsieve::{extract, Outcome};
/// use serde_json::json;
///
/// let response = "```json\n{\"name\": \"Alice\"}\n```";
/// assert_eq!(extract(response), Outcome::Found(json!({"name": "Alice"})));
/// ```
pub fn extract(input: &str) -> Outcome {
    Pipeline::new().extract(input)
}

/// Extracts a structured value and deserializes it into `T`.
///
/// A typed convenience over [`extract`]: returns `None` when no value is
/// recoverable or the recovered value does not match the target type.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Plan {
///     step: u32,
/// }
///
/// let response = "The next action is {\"step\": 3} as planned.";
/// let plan: Plan = jsonsieve::extract_as(response).unwrap();
/// assert_eq!(plan, Plan { step: 3 });
/// ```
pub fn extract_as<T: DeserializeOwned>(input: &str) -> Option<T> {
    match extract(input) {
        Outcome::Found(value) => serde_json::from_value(value).ok(),
        Outcome::Absent => None,
    }
}
