//! Navigation link matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Exact match of a link target against the current path. Prefixes never
/// match, so `/libros/` is not active on `/libros/42/`.
#[must_use]
pub fn is_current(href: Option<&str>, current_path: &str) -> bool {
    href.is_some_and(|href| !href.is_empty() && href == current_path)
}
