//! Recovery strategies tried by the pipeline.

mod balanced_scan;
mod clean_retry;
mod direct;
mod generic_fence;
mod labeled_fence;

pub use balanced_scan::BalancedScan;
pub use clean_retry::CleanAndRetry;
pub use direct::DirectParse;
pub use generic_fence::GenericFence;
pub use labeled_fence::LabeledFence;

use serde_json::Value;

/// A single recovery strategy.
///
/// Each strategy owns a complete parse attempt over the raw input; the
/// pipeline never hands one strategy's intermediate text to another. A
/// strategy that finds nothing parseable reports `None`, which is routine
/// rather than an error.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// Returns the name of this strategy for diagnostics.
    fn name(&self) -> &'static str;

    /// Attempts to recover a complete value from the input.
    fn attempt(&self, input: &str) -> Option<Value>;

    /// Returns the position of this strategy in the fixed order.
    ///
    /// Lower values run first.
    fn priority(&self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_parse_priority() {
        assert_eq!(DirectParse.priority(), 1);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(DirectParse.name(), "direct_parse");
        assert_eq!(LabeledFence.name(), "labeled_fence");
        assert_eq!(GenericFence.name(), "generic_fence");
        assert_eq!(BalancedScan.name(), "balanced_scan");
        assert_eq!(CleanAndRetry.name(), "clean_and_retry");
    }

    #[test]
    fn test_fixed_ordering() {
        let priorities = [
            DirectParse.priority(),
            LabeledFence.priority(),
            GenericFence.priority(),
            BalancedScan.priority(),
            CleanAndRetry.priority(),
        ];
        let mut sorted = priorities;
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);
    }
}
