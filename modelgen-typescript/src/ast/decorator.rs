//! Class decorator entity.

use modelgen_codegen::is_blank;
use serde::Deserialize;

use super::Render;
use crate::RenderContext;
use crate::serde_helpers::{defaulting_vec, scalar_string};

/// One `name: value` option inside a decorator call.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DecoratorOption {
    pub name: String,
    #[serde(deserialize_with = "scalar_string")]
    pub value: String,
}

impl DecoratorOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A decorator emitted before a class declaration, e.g.
/// `@Component({ selector: 'app' })`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Decorator {
    /// Decorator name; blank suppresses the decorator entirely.
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(deserialize_with = "defaulting_vec")]
    pub options: Vec<DecoratorOption>,
}

impl Decorator {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(DecoratorOption::new(name, value));
        self
    }
}

impl Render for Decorator {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.ty) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let ind = ctx.layout.indent();

        let last = self.options.len().saturating_sub(1);
        let options: Vec<String> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| {
                let trailer = if i < last {
                    format!(",{sp}")
                } else {
                    String::new()
                };
                format!("{ind}{}:{sp}{}{trailer}", o.name, o.value)
            })
            .collect();

        // The compact close keeps a trailing space so the class header that
        // follows stays separated; prettified output relies on the newline
        // join instead.
        let close = if ctx.layout.is_pretty() { "})" } else { "}) " };

        let parts = vec![
            format!("@{}({{", self.ty),
            options.join(ctx.layout.newline()),
            close.to_string(),
        ];
        ctx.layout.join(&parts)
    }
}
