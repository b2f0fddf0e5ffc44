//! Module specifiers referenced by JavaScript and TypeScript sources

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions scanned for JS-style imports
pub const JS_EXTENSIONS: &[&str] = &[".js", ".ts", ".jsx", ".tsx", ".mjs", ".cjs"];

static IMPORT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // import x from "mod"
        r#"import\s+.*?\s+from\s+["']([^"']+)["']"#,
        // require("mod")
        r#"require\s*\(\s*["']([^"']+)["']\s*\)"#,
        // import("mod")
        r#"import\s*\(\s*["']([^"']+)["']\s*\)"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid import regex"))
    .collect()
});

pub fn is_js_extension(extension: &str) -> bool {
    JS_EXTENSIONS.contains(&extension)
}

/// Every specifier matched by any import form, grouped by form
pub fn js_imports(source: &str) -> Vec<String> {
    IMPORT_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern
                .captures_iter(source)
                .filter_map(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
