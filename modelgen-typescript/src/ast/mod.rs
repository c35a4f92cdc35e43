//! Entity data model and per-entity renderers.
//!
//! Every entity is a plain record deserializable from the declarative
//! input, with a fluent builder for programmatic construction. Rendering is
//! purely top-down: entities hold no parent references and the formatting
//! context is threaded into each call.
//!
//! An entity whose identifying name is blank renders to the empty string at
//! every target; callers filter these out before joining.

mod class;
mod decorator;
mod enums;
mod imports;
mod interface;
mod method;
mod property;

pub use class::Class;
pub use decorator::{Decorator, DecoratorOption};
pub use enums::{Enum, EnumItem};
pub use imports::ImportRef;
pub use interface::Interface;
pub use method::Method;
pub use property::Property;

use serde::Deserialize;

use crate::RenderContext;

/// Trait for entities that render to a source-text fragment.
///
/// `render` is a total function: the all-fields-default case yields the
/// empty string rather than an error.
pub trait Render {
    fn render(&self, ctx: &RenderContext) -> String;
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Private,
    Protected,
    #[default]
    Public,
}

impl Modifier {
    /// The TypeScript keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Public => "public",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_as_str() {
        assert_eq!(Modifier::Private.as_str(), "private");
        assert_eq!(Modifier::Protected.as_str(), "protected");
        assert_eq!(Modifier::Public.as_str(), "public");
    }

    #[test]
    fn test_modifier_default_and_deserialize() {
        assert_eq!(Modifier::default(), Modifier::Public);
        let m: Modifier = serde_json::from_str(r#""protected""#).unwrap();
        assert_eq!(m, Modifier::Protected);
    }
}
