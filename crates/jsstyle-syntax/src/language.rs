//! JavaScript file detection and grammar selection.

use std::path::Path;

/// File extensions treated as JavaScript sources.
pub const JAVASCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx"];

/// Returns whether an extension (without the dot) names a JavaScript file.
///
/// Matching ignores ASCII case.
#[must_use]
pub fn is_javascript_extension(ext: &str) -> bool {
    JAVASCRIPT_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// Returns whether a path has a JavaScript extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jsstyle_syntax::is_javascript_path;
///
/// assert!(is_javascript_path(Path::new("src/app.mjs")));
/// assert!(!is_javascript_path(Path::new("README.md")));
/// ```
#[must_use]
pub fn is_javascript_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_javascript_extension)
}

/// Returns the Tree-sitter grammar used for every JavaScript dialect.
pub(crate) fn tree_sitter_language() -> tree_sitter::Language {
    tree_sitter_javascript::LANGUAGE.into()
}
