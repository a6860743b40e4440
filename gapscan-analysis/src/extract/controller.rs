//! Whole-controller facts: class name, methods, validation style,
//! authorization presence.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use gapscan_core::MethodRecord;

use super::method_body;

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\w+)").expect("class name pattern"));

static INLINE_VALIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$request->validate\s*\(\s*\[").expect("inline validate pattern"));

static FORM_REQUEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]\w+Request\s+\$request").expect("form request pattern"));

static VALIDATED_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$request->validated\(\)").expect("validated call pattern"));

static RULE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'[a-z_]+'\s*=>\s*['")\[]"#).expect("rule entry pattern"));

/// How a controller validates incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStyle {
    /// Inline `$request->validate([...])` with visible rules.
    Inline,
    /// A dedicated form-request class injected as the request type.
    FormRequest,
    /// Helper-based `Validator::make(...)`.
    HelperValidator,
    /// Calls `validated()` but declares no visible rules here.
    ValidatedOnly,
    /// No explicit validation found.
    None,
}

/// Extracted facts for one controller artifact.
#[derive(Debug, Clone)]
pub struct ControllerFacts {
    pub class_name: Option<String>,
    pub methods: Vec<MethodRecord>,
    pub validation: ValidationStyle,
    /// Count of visible rule entries for the inline style.
    pub rule_count: usize,
    pub has_authorization: bool,
    pub has_try: bool,
    pub has_catch: bool,
    pub has_transaction: bool,
}

/// Extract controller facts from raw text.
pub fn extract_controller(text: &str) -> ControllerFacts {
    let class_name = CLASS_NAME
        .captures(text)
        .map(|c| c[1].to_string());

    let methods = method_body::extract_methods(text);

    let validation = if INLINE_VALIDATE.is_match(text) {
        ValidationStyle::Inline
    } else if FORM_REQUEST.is_match(text) {
        ValidationStyle::FormRequest
    } else if text.contains("Validator::make") {
        ValidationStyle::HelperValidator
    } else if VALIDATED_CALL.is_match(text) {
        ValidationStyle::ValidatedOnly
    } else {
        ValidationStyle::None
    };

    let rule_count = RULE_ENTRY.find_iter(text).count();

    ControllerFacts {
        class_name,
        methods,
        validation,
        rule_count,
        has_authorization: text.contains("$this->authorize")
            || text.contains("->middleware('permission"),
        has_try: text.contains("try {") || text.contains("try{"),
        has_catch: text.contains("catch ("),
        has_transaction: text.contains("DB::transaction")
            || text.contains("DB::beginTransaction"),
    }
}

/// Method names declared in the controller (any visibility), minus
/// the constructor. Used by the route binder, which must see methods
/// the signature-level extractor's visibility filter might skip.
pub fn method_names(text: &str) -> Vec<String> {
    static ANY_FN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"function\s+(\w+)\s*\(").expect("function name pattern"));
    ANY_FN
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .filter(|n| n != "__construct")
        .collect()
}
