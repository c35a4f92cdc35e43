//! Small text predicates shared by the renderers.

/// Returns true for empty or whitespace-only strings.
///
/// This is the universal absence convention: an entity whose identifying
/// name is blank renders to the empty string and is filtered out of joins.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
