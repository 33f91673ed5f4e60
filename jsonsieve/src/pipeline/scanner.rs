//! String-and-escape-aware balanced delimiter scanner.
//!
//! Given text that starts at a candidate opening delimiter, the scanner
//! returns the shortest well-formed balanced span. Delimiter characters
//! inside string literals never affect nesting depth, so values like
//! `{"a": "x\"}y"}` scan correctly.

use crate::error::ScanError;

/// A structural delimiter pair tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{...}`
    Brace,
    /// `[...]`
    Bracket,
}

impl Delimiter {
    /// Returns the opening character for this pair.
    #[inline]
    pub const fn open(self) -> char {
        match self {
            Delimiter::Brace => '{',
            Delimiter::Bracket => '[',
        }
    }

    /// Returns the closing character for this pair.
    #[inline]
    pub const fn close(self) -> char {
        match self {
            Delimiter::Brace => '}',
            Delimiter::Bracket => ']',
        }
    }
}

/// Returns the shortest prefix of `text` forming a balanced span of the
/// given delimiter pair.
///
/// The scan walks forward tracking nesting depth, whether the position is
/// inside a quoted string, and a one-character escape flag. A quote toggles
/// string mode only when not escaped; a backslash arms the escape flag for
/// exactly the next character; depth changes are counted only outside
/// strings. The returned slice includes the character that brings depth
/// back to zero.
///
/// # Errors
///
/// * [`ScanError::MissingOpener`] if `text` does not start with the opening
///   character. Callers are expected to locate the opener first; hitting
///   this is a sequencing defect, not an input condition.
/// * [`ScanError::Unterminated`] if depth never returns to zero before the
///   input ends.
///
/// # Examples
///
/// ```
/// use jsonsieve::pipeline::scanner::{balanced_span, Delimiter};
///
/// let text = r#"{"a": 1} trailing prose"#;
/// let span = balanced_span(text, Delimiter::Brace).unwrap();
/// assert_eq!(span, r#"{"a": 1}"#);
/// ```
pub fn balanced_span(text: &str, delimiter: Delimiter) -> Result<&str, ScanError> {
    let open = delimiter.open();
    let close = delimiter.close();

    if !text.starts_with(open) {
        return Err(ScanError::MissingOpener(open));
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        if ch == '\\' {
            escaped = true;
            continue;
        }

        if ch == '"' {
            in_string = !in_string;
            continue;
        }

        if in_string {
            continue;
        }

        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Ok(&text[..idx + ch.len_utf8()]);
            }
        }
    }

    Err(ScanError::Unterminated(close))
}
