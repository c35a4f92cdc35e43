//! Engine configuration.

use serde::Deserialize;

/// Formatting and naming knobs recognized by the renderer.
///
/// Unknown keys in the declarative input are ignored; missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Human-readable layout with newlines and indentation. When false the
    /// output is minified.
    pub prettify: bool,

    /// Width of one indent unit in spaces. Zero is legal and yields no
    /// indentation while newlines remain.
    #[serde(alias = "tabSize")]
    pub indent_width: usize,

    /// When set, the constructor of every extending class stamps this field
    /// with the class's own name as a string literal.
    pub class_name: Option<String>,

    /// Field assigned `true` by tracked setters. Set to an empty string to
    /// suppress the statement globally.
    pub is_dirty: String,

    /// Field assigned the current timestamp by tracked setters. Empty
    /// string suppresses the statement globally.
    pub last_updated: String,

    /// Reserved: allows property rendering to omit an explicit type
    /// annotation when the type is inferable from the initializer.
    pub infer_type: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prettify: true,
            indent_width: 4,
            class_name: None,
            is_dirty: "_isDirty".to_string(),
            last_updated: "_lastUpdated".to_string(),
            infer_type: false,
        }
    }
}

impl Options {
    /// Default options with minified output.
    pub fn compact() -> Self {
        Self {
            prettify: false,
            ..Self::default()
        }
    }
}
