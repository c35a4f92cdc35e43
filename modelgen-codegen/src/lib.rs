//! Shared code generation building blocks for modelgen.
//!
//! This crate provides the language-agnostic pieces used by the rendering
//! engine in `modelgen-typescript`:
//!
//! - [`Layout`] - Formatting context (spacing, newlines, indentation)
//!   derived from a prettify flag and an indent width
//! - [`ImportCollector`] - Import grouping and deduplication by source path
//! - [`is_blank`] - The absence predicate shared by every renderer

mod imports;
mod layout;
mod text;

pub use imports::ImportCollector;
pub use layout::Layout;
pub use text::is_blank;
