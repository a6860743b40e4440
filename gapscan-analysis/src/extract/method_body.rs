//! Method body extraction via depth-counted brace scanning.
//!
//! The scanner is a minimal finite-state machine (state = brace
//! depth) that only reads the input and returns an immutable span.

use std::sync::LazyLock;

use regex::Regex;

use gapscan_core::types::method::{BodySpan, MethodRecord};

static METHOD_SIG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public|protected|private)\s+function\s+(\w+)\s*\([^)]*\)(?:\s*:\s*\S+)?\s*\{")
        .expect("method signature pattern")
});

static TODO_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTODO\b|\bFIXME\b|\bimplement me\b|\bplaceholder\b")
        .expect("todo marker pattern")
});

static EMPTY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTODO\b|\bFIXME\b|\bIMPLEMENT\b").expect("empty marker pattern")
});

static RETURN_STMT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\breturn[\s;(]").expect("return pattern"));

/// Scan a body starting at the opening brace byte offset.
///
/// Depth starts at 1 for the opening brace; `{` increments, `}`
/// decrements; the body ends when depth returns to 0. Reaching end of
/// text first marks the span unterminated (the caller degrades this to
/// a WARN, never a crash).
pub fn scan_body(text: &str, open_brace: usize) -> (BodySpan, bool) {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(open_brace), Some(&b'{'));

    let mut depth: u32 = 1;
    let mut pos = open_brace + 1;
    while pos < bytes.len() && depth > 0 {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        pos += 1;
    }

    if depth == 0 {
        // pos is one past the closing brace.
        (
            BodySpan {
                start: open_brace + 1,
                end: pos - 1,
            },
            false,
        )
    } else {
        (
            BodySpan {
                start: open_brace + 1,
                end: bytes.len(),
            },
            true,
        )
    }
}

/// Extract every declared method from a controller-style source text.
/// Constructors are skipped.
pub fn extract_methods(text: &str) -> Vec<MethodRecord> {
    let mut methods = Vec::new();
    for caps in METHOD_SIG.captures_iter(text) {
        let name = &caps[1];
        if name == "__construct" {
            continue;
        }
        let whole = caps.get(0).expect("capture group 0");
        // The signature pattern always ends at the opening brace.
        let open_brace = whole.end() - 1;
        let (span, unterminated) = scan_body(text, open_brace);
        methods.push(classify(name, span, unterminated, text));
    }
    methods
}

/// Classify one extracted body.
fn classify(name: &str, span: BodySpan, unterminated: bool, text: &str) -> MethodRecord {
    let body = &text[span.start..span.end];

    let non_blank: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let effective_line_count = non_blank.len();

    // Empty iff nothing in the body, or only comment lines that carry
    // an explicit placeholder marker.
    let only_comments =
        effective_line_count > 0 && non_blank.iter().all(|l| l.starts_with("//"));
    let is_empty =
        effective_line_count == 0 || (only_comments && EMPTY_MARKER.is_match(body));

    MethodRecord {
        name: name.to_string(),
        body_span: span,
        effective_line_count,
        is_empty,
        has_todo_marker: TODO_MARKER.is_match(body),
        has_return_statement: RETURN_STMT.is_match(body),
        unterminated,
    }
}
