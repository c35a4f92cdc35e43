//! Method entity.

use modelgen_codegen::is_blank;
use serde::Deserialize;

use super::{Modifier, Property, Render};
use crate::RenderContext;
use crate::serde_helpers::defaulting_vec;

/// A class or interface method.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Method {
    pub name: String,

    /// Return type.
    #[serde(rename = "type")]
    pub ty: String,

    pub modifier: Modifier,

    #[serde(rename = "static")]
    pub is_static: bool,

    /// Parameter list, rendered through [`Property::arg_string`].
    #[serde(deserialize_with = "defaulting_vec")]
    pub args: Vec<Property>,

    /// Raw body statement.
    pub body: String,
}

impl Default for Method {
    fn default() -> Self {
        Self {
            name: String::new(),
            ty: "void".to_string(),
            modifier: Modifier::Public,
            is_static: false,
            args: Vec::new(),
            body: "return;".to_string(),
        }
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn arg(mut self, arg: Property) -> Self {
        self.args.push(arg);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    fn args_string(&self, ctx: &RenderContext) -> String {
        let parts: Vec<String> = self
            .args
            .iter()
            .map(|a| a.arg_string(ctx))
            .filter(|s| !s.is_empty())
            .collect();
        parts.join(&format!(",{}", ctx.layout.space()))
    }

    /// Interface member form: signature line with a trailing `;`, no body.
    pub fn signature_string(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let args: Vec<String> = self
            .args
            .iter()
            .filter(|a| !is_blank(&a.name))
            .map(|a| {
                let optional = if a.optional { "?" } else { "" };
                format!("{}{optional}:{sp}{}", a.name, a.ty)
            })
            .collect();
        format!(
            "{}{}({}):{sp}{};",
            ctx.layout.indent(),
            self.name,
            args.join(&format!(",{sp}")),
            self.ty
        )
    }
}

impl Render for Method {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let ind = ctx.layout.indent();
        let stat = if self.is_static { " static" } else { "" };

        // The space between the modifier chain and the name is required by
        // the grammar even in compact mode.
        let parts = vec![
            format!(
                "{ind}{}{stat} {}({}):{sp}{}{sp}{{",
                self.modifier.as_str(),
                self.name,
                self.args_string(ctx),
                self.ty
            ),
            format!("{ind}{ind}{}", self.body),
            format!("{ind}}}"),
        ];
        ctx.layout.join(&parts)
    }
}
