//! Interface entity.

use modelgen_codegen::is_blank;
use serde::Deserialize;

use super::{ImportRef, Method, Property, Render};
use crate::RenderContext;
use crate::serde_helpers::defaulting_vec;

/// An exported interface. Properties and methods render as signatures only.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interface {
    pub name: String,

    /// Single supertype name; blank means no `extends` clause.
    pub extends: String,

    pub import: Vec<ImportRef>,

    #[serde(deserialize_with = "defaulting_vec")]
    pub properties: Vec<Property>,

    #[serde(deserialize_with = "defaulting_vec")]
    pub methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.extends = supertype.into();
        self
    }

    pub fn import(mut self, import: ImportRef) -> Self {
        self.import.push(import);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

impl Render for Interface {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let extends = if is_blank(&self.extends) {
            String::new()
        } else {
            format!(" extends {}", self.extends)
        };

        let mut parts = vec![format!("export interface {}{extends}{sp}{{", self.name)];

        let properties: Vec<String> = self
            .properties
            .iter()
            .map(|p| p.signature_string(ctx))
            .filter(|s| !s.is_empty())
            .collect();
        if !properties.is_empty() {
            parts.push(ctx.layout.join(&properties));
        }

        let methods: Vec<String> = self
            .methods
            .iter()
            .map(|m| m.signature_string(ctx))
            .filter(|s| !s.is_empty())
            .collect();
        if !methods.is_empty() {
            parts.push(ctx.layout.join(&methods));
        }

        parts.push("}".to_string());
        ctx.layout.join(&parts)
    }
}
