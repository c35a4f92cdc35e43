//! Import reference entity.

use serde::Deserialize;

/// One named import from a source path. Many names may share one path; the
/// program assembler groups them into a single import line per path.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ImportRef {
    pub name: String,
    pub path: String,
}

impl ImportRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
