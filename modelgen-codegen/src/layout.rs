//! Formatting context for code generation.

/// Mode-dependent separators consulted by every renderer.
///
/// A `Layout` is derived from a single prettify flag plus an indent width
/// and is recomputed for every top-level render call; it is never held as
/// ambient state, so two engines with different settings can coexist.
///
/// - prettified: `space = " "`, `newline = "\n"`, `indent` is `indent_width`
///   spaces, and fragments join with newlines
/// - compact: all three separators are empty and fragments join with
///   nothing, yielding minified output
///
/// # Example
///
/// ```
/// use modelgen_codegen::Layout;
///
/// let pretty = Layout::new(true, 4);
/// assert_eq!(pretty.indent(), "    ");
///
/// let compact = Layout::new(false, 4);
/// assert_eq!(compact.indent(), "");
/// assert_eq!(compact.join(&["a{".into(), "b;".into(), "}".into()]), "a{b;}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    prettify: bool,
    indent: String,
}

impl Layout {
    /// Create a layout from a prettify flag and an indent width in spaces.
    ///
    /// An indent width of zero is legal: newlines remain in prettified mode
    /// while the indent unit is empty.
    pub fn new(prettify: bool, indent_width: usize) -> Self {
        let indent = if prettify {
            " ".repeat(indent_width)
        } else {
            String::new()
        };
        Self { prettify, indent }
    }

    /// Prettified layout with the conventional 4-space indent.
    pub fn pretty() -> Self {
        Self::new(true, 4)
    }

    /// Compact layout.
    pub fn compact() -> Self {
        Self::new(false, 4)
    }

    /// Whether this layout produces human-readable output.
    pub fn is_pretty(&self) -> bool {
        self.prettify
    }

    /// The incidental-space token (`" "` or `""`).
    pub fn space(&self) -> &str {
        if self.prettify { " " } else { "" }
    }

    /// The statement-newline token (`"\n"` or `""`).
    pub fn newline(&self) -> &str {
        if self.prettify { "\n" } else { "" }
    }

    /// One indent unit (`indent_width` spaces, or `""` when compact).
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Join rendered fragments: by newline when prettified, directly
    /// concatenated when compact.
    pub fn join(&self, parts: &[String]) -> String {
        parts.join(self.newline())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_separators() {
        let layout = Layout::new(true, 4);
        assert_eq!(layout.space(), " ");
        assert_eq!(layout.newline(), "\n");
        assert_eq!(layout.indent(), "    ");
        assert!(layout.is_pretty());
    }

    #[test]
    fn test_compact_separators() {
        let layout = Layout::new(false, 4);
        assert_eq!(layout.space(), "");
        assert_eq!(layout.newline(), "");
        assert_eq!(layout.indent(), "");
        assert!(!layout.is_pretty());
    }

    #[test]
    fn test_custom_indent_width() {
        assert_eq!(Layout::new(true, 2).indent(), "  ");
        assert_eq!(Layout::new(true, 8).indent(), "        ");
    }

    #[test]
    fn test_zero_indent_keeps_newlines() {
        let layout = Layout::new(true, 0);
        assert_eq!(layout.indent(), "");
        assert_eq!(layout.newline(), "\n");
    }

    #[test]
    fn test_join_modes() {
        let parts = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Layout::pretty().join(&parts), "a\nb");
        assert_eq!(Layout::compact().join(&parts), "ab");
    }
}
