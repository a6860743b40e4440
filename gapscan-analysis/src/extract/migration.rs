//! Schema migration extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::method_body;

static COLUMN_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$table->(?:string|text|integer|bigInteger|boolean|decimal|date|datetime|timestamp|json|foreignId|unsignedBigInteger|float|double|enum|uuid|ulid)\s*\(\s*'(\w+)'",
    )
    .expect("column declaration pattern")
});

/// Columns declared in the `Schema::create` block for the given
/// table, excluding the supplied framework-managed columns. When the
/// create block cannot be isolated, the whole text is scanned.
pub fn table_columns(text: &str, table: &str, framework_columns: &[String]) -> Vec<String> {
    let block = create_block(text, table).unwrap_or(text);
    COLUMN_DECL
        .captures_iter(block)
        .map(|c| c[1].to_string())
        .filter(|name| !framework_columns.iter().any(|fc| fc == name))
        .collect()
}

/// Isolate the `Schema::create('<table>', function ... { ... })` block
/// by brace-scanning from the callback's opening brace.
fn create_block<'a>(text: &'a str, table: &str) -> Option<&'a str> {
    let decl = Regex::new(&format!(
        r#"(?i)Schema::create\s*\(\s*['"]{}['"]"#,
        regex::escape(table)
    ))
    .ok()?;
    let start = decl.find(text)?.end();
    let open = text[start..].find('{')? + start;
    let (span, unterminated) = method_body::scan_body(text, open);
    if unterminated {
        return None;
    }
    Some(&text[span.start..span.end])
}
