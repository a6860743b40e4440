//! Frontend page extraction: HTTP call sites.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static API_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)api\.(get|post|put|patch|delete)\s*\(\s*[`'"](/[^`'"]+)[`'"]"#)
        .expect("api call pattern")
});

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\$\{[^}]+\}").expect("path parameter pattern"));

/// Placeholder token substituted for interpolated path parameters.
pub const PARAM_TOKEN: &str = "/{id}";

/// One HTTP call site extracted from a page, with interpolated path
/// parameters normalized to a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Upper-cased HTTP verb.
    pub method: String,
    pub path: String,
}

impl CallSite {
    /// First non-parameter path segment, used for coarse route-table
    /// matching. Query strings and placeholder segments are dropped.
    pub fn primary_segment(&self) -> &str {
        let path = self.path.split('?').next().unwrap_or(&self.path);
        path.split('/')
            .find(|seg| !seg.is_empty() && !seg.starts_with('{'))
            .unwrap_or("")
    }
}

/// Extract HTTP call sites from page text, in order of appearance.
pub fn extract_call_sites(text: &str) -> Vec<CallSite> {
    API_CALL
        .captures_iter(text)
        .map(|c| CallSite {
            method: c[1].to_uppercase(),
            path: PATH_PARAM.replace_all(&c[2], PARAM_TOKEN).into_owned(),
        })
        .collect()
}

static FORM_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<Input|<input|<Select|<select|<Textarea|<textarea|<SelectNative")
        .expect("form field pattern")
});

/// Count visible form fields on a page.
pub fn form_field_count(text: &str) -> usize {
    FORM_FIELD.find_iter(text).count()
}

/// Whether the page reaches the backend through an indirect channel
/// (query hooks, a store, or a bare fetch) rather than literal `api.*`
/// call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataChannel {
    /// Literal `api.<verb>(...)` call sites were found.
    Direct,
    /// Query/mutation hooks with an api import.
    Hooks,
    /// A state store or direct fetch/submit handler.
    StoreOrFetch,
    /// Custom data hooks (project-specific `useXxx` helpers).
    CustomHooks,
    /// Hooks present but no api import visible.
    HooksWithoutApi,
    /// Nothing detected.
    None,
}

static CUSTOM_HOOK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"use[A-Z]\w+").expect("custom hook pattern"));

/// React built-ins and router/query hooks that are not data hooks.
const STANDARD_HOOKS: &[&str] = &[
    "useState",
    "useEffect",
    "useRef",
    "useMemo",
    "useCallback",
    "useNavigate",
    "useParams",
    "useSearchParams",
    "useLocation",
    "useQuery",
    "useMutation",
    "useQueryClient",
];

/// Classify how a page without direct call sites talks to the backend.
pub fn data_channel(text: &str, call_sites: &[CallSite]) -> DataChannel {
    if !call_sites.is_empty() {
        return DataChannel::Direct;
    }

    let has_hooks = text.contains("useQuery") || text.contains("useMutation");
    let has_api_import = {
        static API_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"import.*api.*from|import.*axios").expect("api import pattern")
        });
        API_IMPORT.is_match(text)
    };
    let has_store = text.contains("useAuthStore")
        || text.contains("useStore")
        || text.contains("Store()");
    let has_fetch = {
        static FETCH_LIKE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"fetch\s*\(|\.login\s*\(|\.register\s*\(|handleSubmit")
                .expect("fetch pattern")
        });
        FETCH_LIKE.is_match(text)
    };

    if has_hooks && has_api_import {
        return DataChannel::Hooks;
    }
    if has_store || has_fetch {
        return DataChannel::StoreOrFetch;
    }

    let custom_data_hooks = CUSTOM_HOOK
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|h| !STANDARD_HOOKS.contains(h))
        .count();
    if custom_data_hooks > 0 {
        return DataChannel::CustomHooks;
    }
    if has_hooks {
        return DataChannel::HooksWithoutApi;
    }
    DataChannel::None
}
