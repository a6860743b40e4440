//! Route table extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ROUTE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Route::(get|post|put|delete|patch|apiResource|resource)\(\s*['"]([^'"]+)['"]"#)
        .expect("route declaration pattern")
});

/// One declared route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecl {
    pub verb: String,
    pub path: String,
}

/// Parsed view over a route table artifact.
pub struct RouteTable<'a> {
    text: &'a str,
}

impl<'a> RouteTable<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Every route declaration in order of appearance.
    pub fn declarations(&self) -> Vec<RouteDecl> {
        ROUTE_DECL
            .captures_iter(self.text)
            .map(|c| RouteDecl {
                verb: c[1].to_string(),
                path: c[2].to_string(),
            })
            .collect()
    }

    /// Method names the table binds for the given controller class,
    /// in order of appearance. Matches `ClassName::class, 'method'`
    /// bindings; a leading word or namespace separator is rejected so
    /// `UserController` does not match `PortalUserController`.
    pub fn bound_methods(&self, class_name: &str) -> Vec<String> {
        let pattern = format!(
            r"(\w|\\)?{}::class,\s*'(\w+)'",
            regex::escape(class_name)
        );
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => return Vec::new(),
        };
        re.captures_iter(self.text)
            .filter(|c| c.get(1).is_none())
            .map(|c| c[2].to_string())
            .collect()
    }

    /// Whether a literal path segment occurs anywhere in the table.
    /// Intentionally coarse: tolerates prefix/middleware wrapping in
    /// the declaration while still catching absent endpoints.
    pub fn contains_segment(&self, segment: &str) -> bool {
        !segment.is_empty() && self.text.contains(segment)
    }
}
