//! Balanced-span scan strategy.

use serde_json::Value;

use super::Strategy;
use crate::pipeline::scanner::{self, Delimiter};

/// Scans from the earliest structural opener and parses the balanced span.
///
/// Whichever of the first `{` and the first `[` occurs earlier wins; the
/// scanner then yields the shortest balanced span starting there. With two
/// sibling top-level values only the first complete one is considered. When
/// neither opener occurs, the strategy yields nothing and the pipeline moves
/// straight on.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedScan;

impl BalancedScan {
    /// Picks the earliest opening delimiter in the input.
    fn earliest_opener(input: &str) -> Option<(usize, Delimiter)> {
        match (input.find('{'), input.find('[')) {
            (Some(obj), Some(arr)) if obj < arr => Some((obj, Delimiter::Brace)),
            (_, Some(arr)) => Some((arr, Delimiter::Bracket)),
            (Some(obj), None) => Some((obj, Delimiter::Brace)),
            (None, None) => None,
        }
    }
}

impl Strategy for BalancedScan {
    #[inline]
    fn name(&self) -> &'static str {
        "balanced_scan"
    }

    fn attempt(&self, input: &str) -> Option<Value> {
        let (start, delimiter) = Self::earliest_opener(input)?;
        let span = scanner::balanced_span(&input[start..], delimiter).ok()?;
        serde_json::from_str(span).ok()
    }

    #[inline]
    fn priority(&self) -> u8 {
        4
    }
}
