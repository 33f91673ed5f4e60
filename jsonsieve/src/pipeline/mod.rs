//! Extraction pipeline that coordinates recovery strategies.

pub mod cleaner;
pub mod fences;
pub mod scanner;
pub mod strategies;

use tracing::{debug, trace};

use crate::outcome::Outcome;
use strategies::{BalancedScan, CleanAndRetry, DirectParse, GenericFence, LabeledFence, Strategy};

/// Multi-strategy extraction pipeline.
///
/// Strategies run in a fixed order; the first one to produce a complete
/// value short-circuits the rest. No strategy is skipped on input
/// heuristics and none mutates shared state, so a single instance can be
/// shared freely across threads.
///
/// # Examples
///
/// ```
/// use jsonsieve::Pipeline;
///
/// let pipeline = Pipeline::new();
/// let outcome = pipeline.extract("The plan: ```json\n{\"step\": 1}\n``` as requested.");
/// assert!(outcome.is_found());
/// ```
#[derive(Debug)]
pub struct Pipeline {
    /// Strategies in the order they are attempted.
    strategies: Vec<Box<dyn Strategy>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates a pipeline with the fixed strategy order:
    ///
    /// 1. [`DirectParse`] - whole trimmed input
    /// 2. [`LabeledFence`] - every ```` ```json ```` fence body
    /// 3. [`GenericFence`] - any fence body, regardless of label
    /// 4. [`BalancedScan`] - earliest balanced `{...}` or `[...]` span
    /// 5. [`CleanAndRetry`] - heuristic cleanup, then one more parse
    pub fn new() -> Self {
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(DirectParse),
            Box::new(LabeledFence),
            Box::new(GenericFence),
            Box::new(BalancedScan),
            Box::new(CleanAndRetry),
        ];

        strategies.sort_by_key(|s| s.priority());

        Self { strategies }
    }

    /// Runs every strategy in order and returns the first recovered value.
    ///
    /// Returns [`Outcome::Absent`] when no strategy succeeds. Malformed
    /// input is an expected condition and never panics or errors.
    pub fn extract(&self, input: &str) -> Outcome {
        for strategy in &self.strategies {
            trace!(strategy = strategy.name(), "attempting strategy");
            if let Some(value) = strategy.attempt(input) {
                debug!(strategy = strategy.name(), "recovered value");
                return Outcome::Found(value);
            }
        }

        debug!(input_len = input.len(), "no strategy recovered a value");
        Outcome::Absent
    }

    /// Returns the number of registered strategies.
    #[inline]
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Returns strategy names in attempt order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}
