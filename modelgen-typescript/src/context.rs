//! Per-call render context.

use modelgen_codegen::Layout;

use crate::Options;

/// Formatting context plus naming knobs threaded into every render call.
///
/// The [`Layout`] is recomputed from the options on construction, so the
/// same entity tree can be rendered repeatedly with different modes and
/// each call produces independently correct output.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub layout: Layout,
    pub options: Options,
}

impl RenderContext {
    /// Derive a context from engine options.
    pub fn new(options: &Options) -> Self {
        Self {
            layout: Layout::new(options.prettify, options.indent_width),
            options: options.clone(),
        }
    }

    /// Default options, prettified layout.
    pub fn pretty() -> Self {
        Self::new(&Options::default())
    }

    /// Default options, minified layout.
    pub fn compact() -> Self {
        Self::new(&Options::compact())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::pretty()
    }
}
