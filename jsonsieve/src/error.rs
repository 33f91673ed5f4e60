//! Error types for the extraction pipeline.

/// Errors produced by the balanced-span scanner.
///
/// These never cross the public API boundary: strategies absorb them and the
/// pipeline reports failure through [`Outcome::Absent`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// The scanner was handed text that does not start with the expected
    /// opening delimiter.
    ///
    /// Strategies locate the opener before invoking the scanner, so this
    /// indicates a sequencing bug in the caller rather than bad input.
    #[error("scan input does not start with '{0}'")]
    MissingOpener(char),

    /// Nesting depth never returned to zero before end of input.
    #[error("no matching '{0}' before end of input")]
    Unterminated(char),
}
