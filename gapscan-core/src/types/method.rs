//! Extracted method records.

use serde::{Deserialize, Serialize};

/// Byte span of a method body within its artifact text, exclusive of
/// the outer braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySpan {
    pub start: usize,
    pub end: usize,
}

impl BodySpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One extracted method. Derived from a brace-balanced scan of the
/// artifact text; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub body_span: BodySpan,
    /// Non-blank lines in the body.
    pub effective_line_count: usize,
    /// True iff the body has zero non-blank lines, or consists solely
    /// of comment lines carrying an explicit TODO/FIXME/placeholder
    /// marker.
    pub is_empty: bool,
    pub has_todo_marker: bool,
    pub has_return_statement: bool,
    /// End of text reached before the brace depth returned to zero.
    /// Surfaces as a WARN, never a crash.
    pub unterminated: bool,
}
