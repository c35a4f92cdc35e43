//! Enum entity.

use modelgen_codegen::is_blank;
use serde::Deserialize;

use super::Render;
use crate::RenderContext;
use crate::serde_helpers::scalar_string_vec;

/// One enum member: `Name = value` with the value segment omitted when
/// blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumItem {
    pub name: String,
    pub value: String,
}

impl EnumItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Render for EnumItem {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let value = if is_blank(&self.value) {
            String::new()
        } else {
            format!("{sp}={sp}{}", self.value)
        };
        format!("{}{value}", self.name)
    }
}

/// An exported enum, described as an ordered name list with an optional
/// value list aligned by index.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Enum {
    pub name: String,

    pub names: Vec<String>,

    /// Aligned by index with `names`; shorter lists mean the remaining
    /// members have no explicit value.
    #[serde(deserialize_with = "scalar_string_vec")]
    pub values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append a member without an explicit value.
    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self.values.push(String::new());
        self
    }

    /// Append a member with an explicit value.
    pub fn variant_with_value(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.names.push(name.into());
        self.values.push(value.into());
        self
    }

    /// Derived member list, pairing names with values by index.
    pub fn items(&self) -> Vec<EnumItem> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = self.values.get(i).cloned().unwrap_or_default();
                EnumItem::new(name.clone(), value)
            })
            .collect()
    }
}

impl Render for Enum {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let ind = ctx.layout.indent();

        let items: Vec<String> = self
            .items()
            .iter()
            .map(|item| item.render(ctx))
            .filter(|s| !s.is_empty())
            .collect();

        // Members are comma-joined in both modes; prettified mode also
        // indents each member and puts it on its own line.
        let body = if ctx.layout.is_pretty() {
            items
                .iter()
                .map(|s| format!("{ind}{s}"))
                .collect::<Vec<_>>()
                .join(",\n")
        } else {
            items.join(",")
        };

        let parts = vec![
            format!("export enum {}{sp}{{", self.name),
            body,
            "}".to_string(),
        ];
        ctx.layout.join(&parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_renders_empty() {
        let e = Enum::default().variant("A");
        assert_eq!(e.render(&RenderContext::compact()), "");
    }

    #[test]
    fn test_empty_enum_compact() {
        let e = Enum::new("Foo");
        assert_eq!(e.render(&RenderContext::compact()), "export enum Foo{}");
    }

    #[test]
    fn test_enum_with_partial_values_compact() {
        let e = Enum {
            name: "Foo".to_string(),
            names: vec!["foo".to_string(), "bar".to_string()],
            values: vec!["1".to_string()],
        };
        assert_eq!(e.render(&RenderContext::compact()), "export enum Foo{foo=1,bar}");
    }

    #[test]
    fn test_enum_pretty() {
        let e = Enum::new("Color")
            .variant_with_value("Red", "'red'")
            .variant("Green");
        assert_eq!(
            e.render(&RenderContext::pretty()),
            "export enum Color {\n    Red = 'red',\n    Green\n}"
        );
    }

    #[test]
    fn test_enum_item_value_segment() {
        let ctx = RenderContext::pretty();
        assert_eq!(EnumItem::new("A", "").render(&ctx), "A");
        assert_eq!(EnumItem::new("A", "1").render(&ctx), "A = 1");
        assert_eq!(EnumItem::new("A", "1").render(&RenderContext::compact()), "A=1");
        assert_eq!(EnumItem::new("", "1").render(&ctx), "");
    }

    #[test]
    fn test_blank_member_names_filtered() {
        let e = Enum::new("Foo").variant("a").variant("").variant("b");
        assert_eq!(e.render(&RenderContext::compact()), "export enum Foo{a,b}");
    }

    #[test]
    fn test_deserialize_numeric_values() {
        let e: Enum = serde_json::from_str(
            r#"{"name": "Foo", "names": ["foo", "bar"], "values": [1]}"#,
        )
        .unwrap();
        assert_eq!(e.items()[0].value, "1");
        assert_eq!(e.items()[1].value, "");
    }
}
