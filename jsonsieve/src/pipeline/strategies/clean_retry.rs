//! Cleanup-and-retry strategy.

use serde_json::Value;

use super::Strategy;
use crate::pipeline::cleaner;

/// Cleans the full original text and retries a direct parse.
///
/// The last resort: the cleaner strips narrative prefixes, `//` line
/// comments, and trailing commas before one more parse attempt over the
/// whole input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanAndRetry;

impl Strategy for CleanAndRetry {
    #[inline]
    fn name(&self) -> &'static str {
        "clean_and_retry"
    }

    fn attempt(&self, input: &str) -> Option<Value> {
        serde_json::from_str(&cleaner::clean(input)).ok()
    }

    #[inline]
    fn priority(&self) -> u8 {
        5
    }
}
