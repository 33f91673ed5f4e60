//! JSON-labeled fence strategy.

use serde_json::Value;

use super::Strategy;
use crate::pipeline::fences;

/// Parses bodies of fences labeled `json`, in order of appearance.
///
/// Every labeled body is attempted before the pipeline falls through to
/// generic fences; the first body that parses wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledFence;

impl Strategy for LabeledFence {
    #[inline]
    fn name(&self) -> &'static str {
        "labeled_fence"
    }

    fn attempt(&self, input: &str) -> Option<Value> {
        fences::fences(input)
            .into_iter()
            .filter(|fence| fence.is_json_labeled())
            .find_map(|fence| serde_json::from_str(fence.body).ok())
    }

    #[inline]
    fn priority(&self) -> u8 {
        2
    }
}
