//! Generic fence strategy.

use serde_json::Value;

use super::Strategy;
use crate::pipeline::fences;

/// Parses any fenced body regardless of label, in order of appearance.
///
/// Runs after [`LabeledFence`](super::LabeledFence) has tried and failed
/// every `json`-labeled body, rescuing payloads in unlabeled or
/// mislabeled blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericFence;

impl Strategy for GenericFence {
    #[inline]
    fn name(&self) -> &'static str {
        "generic_fence"
    }

    fn attempt(&self, input: &str) -> Option<Value> {
        fences::fences(input)
            .into_iter()
            .find_map(|fence| serde_json::from_str(fence.body).ok())
    }

    #[inline]
    fn priority(&self) -> u8 {
        3
    }
}
