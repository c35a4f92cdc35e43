//! Import aggregation and deduplication.

use indexmap::IndexMap;

use crate::Layout;

/// Groups imported names by source path and renders the import block.
///
/// Paths keep first-seen order, as do names within a path; a name imported
/// twice from the same path is recorded once.
///
/// # Example
///
/// ```
/// use modelgen_codegen::{ImportCollector, Layout};
///
/// let mut imports = ImportCollector::new();
/// imports.add("./models", "User");
/// imports.add("./models", "Account");
/// imports.add("./util", "clone");
///
/// let block = imports.render(&Layout::compact());
/// assert_eq!(block, "import{User,Account}from'./models';import{clone}from'./util';");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, Vec<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a named import from a source path.
    pub fn add(&mut self, path: &str, name: &str) {
        let names = self.imports.entry(path.to_string()).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    /// Check if any import has been recorded.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Number of distinct source paths.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Render one `import { a, b } from 'path';` line per distinct path,
    /// joined per the layout.
    pub fn render(&self, layout: &Layout) -> String {
        let sp = layout.space();
        let lines: Vec<String> = self
            .imports
            .iter()
            .map(|(path, names)| {
                format!(
                    "import{sp}{{{sp}{}{sp}}}{sp}from{sp}'{path}';",
                    names.join(&format!(",{sp}")),
                )
            })
            .collect();
        layout.join(&lines)
    }
}
