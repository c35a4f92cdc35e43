//! Class entity: the core rendering algorithm.

use modelgen_codegen::is_blank;
use serde::Deserialize;

use super::{Decorator, ImportRef, Method, Property, Render};
use crate::RenderContext;
use crate::serde_helpers::defaulting_vec;

/// An exported class with optional inheritance, constructor synthesis, and
/// base-model clone/export/undo machinery.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Class {
    pub name: String,

    /// Single supertype name; blank means no `extends` clause.
    pub extends: String,

    pub implements: Vec<String>,

    pub import: Vec<ImportRef>,

    #[serde(deserialize_with = "defaulting_vec")]
    pub properties: Vec<Property>,

    #[serde(deserialize_with = "defaulting_vec")]
    pub methods: Vec<Method>,

    /// Constructor parameters.
    #[serde(deserialize_with = "defaulting_vec")]
    pub args: Vec<Property>,

    /// Names forwarded to `super(...)`.
    #[serde(deserialize_with = "defaulting_vec")]
    pub super_args: Vec<Property>,

    /// Raw statement appended at the end of the constructor body.
    pub constructor_code: String,

    /// Base classes are rendered but not recorded as public class names.
    pub is_base_class: bool,

    /// Emit the clone/export registry fields and the `registerProperty` /
    /// `registerProperties` utility methods.
    pub is_base_model: bool,

    pub decorator: Option<Decorator>,
}

impl Class {
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

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
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

    pub fn arg(mut self, arg: Property) -> Self {
        self.args.push(arg);
        self
    }

    pub fn super_arg(mut self, arg: Property) -> Self {
        self.super_args.push(arg);
        self
    }

    pub fn constructor_code(mut self, code: impl Into<String>) -> Self {
        self.constructor_code = code.into();
        self
    }

    pub fn base_class(mut self) -> Self {
        self.is_base_class = true;
        self
    }

    pub fn base_model(mut self) -> Self {
        self.is_base_model = true;
        self
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// Names of properties flagged for the clone registry, in declaration
    /// order. Derived fresh on every call; rendering never mutates state.
    pub fn clone_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|p| p.can_clone && !is_blank(&p.name))
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Names of properties flagged for the export registry.
    pub fn export_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|p| p.can_export && !is_blank(&p.name))
            .map(|p| p.name.as_str())
            .collect()
    }

    fn render_members<'a, T, F>(items: impl Iterator<Item = &'a T>, render: F) -> Vec<String>
    where
        T: 'a,
        F: Fn(&'a T) -> String,
    {
        items.map(render).filter(|s| !s.is_empty()).collect()
    }

    fn quoted_list(names: &[&str], sp: &str) -> String {
        names
            .iter()
            .map(|n| format!("'{n}'"))
            .collect::<Vec<_>>()
            .join(&format!(",{sp}"))
    }

    fn render_constructor(
        &self,
        ctx: &RenderContext,
        clones: &[&str],
        exports: &[&str],
    ) -> Option<String> {
        let sp = ctx.layout.space();
        let nl = ctx.layout.newline();
        let ind = ctx.layout.indent();

        let args: Vec<String> = self
            .args
            .iter()
            .map(|a| a.arg_string(ctx))
            .filter(|s| !s.is_empty())
            .collect();
        let args = args.join(&format!(",{sp}"));

        // Base models seed their registries in the constructor, so a
        // non-empty registry forces one even without args or a superclass.
        let seeds_registry = self.is_base_model && (!clones.is_empty() || !exports.is_empty());
        if is_blank(&self.extends)
            && args.is_empty()
            && is_blank(&self.constructor_code)
            && !seeds_registry
        {
            return None;
        }

        let mut out = format!("{ind}constructor({args}){sp}{{{nl}");

        if !is_blank(&self.extends) {
            let super_args: Vec<&str> = self
                .super_args
                .iter()
                .filter(|a| !is_blank(&a.name))
                .map(|a| a.name.as_str())
                .collect();
            out += &format!(
                "{ind}{ind}super({});{nl}",
                super_args.join(&format!(",{sp}"))
            );

            if let Some(class_name) = ctx.options.class_name.as_deref()
                && !is_blank(class_name)
            {
                out += &format!("{ind}{ind}this.{class_name}{sp}={sp}'{}';{nl}", self.name);
            }
        }

        if !clones.is_empty() {
            out += &format!(
                "{ind}{ind}this._clones{sp}={sp}[{sp}...this._clones,{sp}{}{sp}];{nl}",
                Self::quoted_list(clones, sp)
            );
        }
        if !exports.is_empty() {
            out += &format!(
                "{ind}{ind}this._exports{sp}={sp}[{sp}...this._exports,{sp}{}{sp}];{nl}",
                Self::quoted_list(exports, sp)
            );
        }

        if !is_blank(&self.constructor_code) {
            out += &format!("{ind}{ind}{}{nl}", self.constructor_code);
        }

        out += &format!("{ind}}}");
        Some(out)
    }

    fn register_property_method() -> Method {
        Method::new("registerProperty")
            .arg(Property::new("name").typed("string"))
            .arg(Property::new("canClone").typed("boolean").value("true"))
            .arg(Property::new("canExport").typed("boolean").value("true"))
            .arg(Property::new("canUndo").typed("boolean").value("true"))
            .body(
                "if (canClone) { this._clones.push(name); } \
                 if (canExport) { this._exports.push(name); } \
                 if (canUndo) { this.__[name] = this[name]; }",
            )
    }

    fn register_properties_method() -> Method {
        Method::new("registerProperties")
            .arg(Property::new("properties").typed("any[]"))
            .body(
                "properties.forEach((p) => { \
                 if (!this.isNullOrUndefined(p) && !this.isNullOrEmpty(p.name)) { \
                 const n = p.name; \
                 const c = this.isNullOrUndefined(p.canClone) ? true : p.canClone; \
                 const e = this.isNullOrUndefined(p.canExport) ? true : p.canExport; \
                 const u = this.isNullOrUndefined(p.canUndo) ? true : p.canUndo; \
                 this.registerProperty(n, c, e, u); } });",
            )
    }
}

impl Render for Class {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let ind = ctx.layout.indent();

        // Pure pre-pass: the constructor and the registry fields both need
        // the fully collected lists before any text is assembled.
        let clones = self.clone_names();
        let exports = self.export_names();

        let extends = if is_blank(&self.extends) {
            String::new()
        } else {
            format!(" extends {}", self.extends)
        };
        let implements = if self.implements.is_empty() {
            String::new()
        } else {
            format!(" implements {}", self.implements.join(&format!(",{sp}")))
        };

        let mut parts = Vec::new();

        if let Some(decorator) = &self.decorator {
            let rendered = decorator.render(ctx);
            if !rendered.is_empty() {
                parts.push(rendered);
            }
        }

        parts.push(format!(
            "export class {}{extends}{implements}{sp}{{",
            self.name
        ));

        let static_properties = Self::render_members(
            self.properties.iter().filter(|p| p.is_static),
            |p| p.render(ctx),
        );
        if !static_properties.is_empty() {
            parts.push(ctx.layout.join(&static_properties));
        }

        let static_methods = Self::render_members(
            self.methods.iter().filter(|m| m.is_static),
            |m| m.render(ctx),
        );
        if !static_methods.is_empty() {
            parts.push(ctx.layout.join(&static_methods));
        }

        let instance_properties = Self::render_members(
            self.properties.iter().filter(|p| !p.is_static),
            |p| p.render(ctx),
        );
        if !instance_properties.is_empty() {
            parts.push(ctx.layout.join(&instance_properties));
        }

        if self.is_base_model {
            parts.push(format!(
                "{ind}protected _clones:{sp}string[]{sp}={sp}[{sp}{}{sp}];",
                Self::quoted_list(&clones, sp)
            ));
            parts.push(format!(
                "{ind}protected _exports:{sp}string[]{sp}={sp}[{sp}{}{sp}];",
                Self::quoted_list(&exports, sp)
            ));
        }

        if let Some(constructor) = self.render_constructor(ctx, &clones, &exports) {
            parts.push(constructor);
        }

        if self.is_base_model {
            parts.push(Self::register_property_method().render(ctx));
            parts.push(Self::register_properties_method().render(ctx));
        }

        let instance_methods = Self::render_members(
            self.methods.iter().filter(|m| !m.is_static),
            |m| m.render(ctx),
        );
        if !instance_methods.is_empty() {
            parts.push(ctx.layout.join(&instance_methods));
        }

        parts.push("}".to_string());
        ctx.layout.join(&parts)
    }
}
