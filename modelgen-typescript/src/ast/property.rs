//! Property entity: fields, accessors, and change tracking.

use modelgen_codegen::is_blank;
use serde::Deserialize;

use super::{Modifier, Render};
use crate::RenderContext;
use crate::serde_helpers::optional_scalar_string;

/// A class or interface property.
///
/// Renders to three targets depending on call site:
///
/// - [`Property::arg_string`] - constructor/method parameter form
/// - [`Property::signature_string`] - interface member form
/// - [`Render::render`] - field/accessor form, including getter/setter
///   synthesis and change-tracking injection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Property {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    pub modifier: Modifier,

    pub optional: bool,

    #[serde(rename = "static")]
    pub is_static: bool,

    /// Emit a backing-field declaration.
    pub declare: bool,

    /// Emit a getter when accessors are in use.
    pub read: bool,

    /// Emit a setter when accessors are in use.
    pub write: bool,

    /// Literal initializer.
    #[serde(deserialize_with = "optional_scalar_string")]
    pub value: Option<String>,

    /// Inject dirty-flag and timestamp bookkeeping into the setter.
    pub track: bool,

    /// Allow suppressing the timestamp statement while tracking.
    pub track_date: bool,

    /// Allow suppressing the dirty-flag statement while tracking.
    pub track_state: bool,

    /// Raw statement overriding the default getter body.
    pub getter_body: Option<String>,

    /// Raw statement overriding the default setter body. Tracking
    /// statements are not appended to a custom body.
    pub setter_body: Option<String>,

    /// Include this property in the owning class's clone registry.
    pub can_clone: bool,

    /// Include this property in the owning class's export registry.
    pub can_export: bool,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            name: String::new(),
            ty: "any".to_string(),
            modifier: Modifier::Public,
            optional: false,
            is_static: false,
            declare: true,
            read: true,
            write: true,
            value: None,
            track: false,
            track_date: true,
            track_state: true,
            getter_body: None,
            setter_body: None,
            can_clone: true,
            can_export: true,
        }
    }
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn typed(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Enable change tracking (forces accessor synthesis).
    pub fn tracked(mut self) -> Self {
        self.track = true;
        self
    }

    pub fn getter(mut self, body: impl Into<String>) -> Self {
        self.getter_body = Some(body.into());
        self
    }

    pub fn setter(mut self, body: impl Into<String>) -> Self {
        self.setter_body = Some(body.into());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.write = false;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.read = false;
        self
    }

    /// Exclude from the owning class's clone registry.
    pub fn no_clone(mut self) -> Self {
        self.can_clone = false;
        self
    }

    /// Exclude from the owning class's export registry.
    pub fn no_export(mut self) -> Self {
        self.can_export = false;
        self
    }

    /// Derived: accessors are synthesized when tracking is on or a custom
    /// getter/setter body is supplied.
    pub fn uses_accessors(&self) -> bool {
        self.track
            || self.getter_body.as_deref().is_some_and(|b| !is_blank(b))
            || self.setter_body.as_deref().is_some_and(|b| !is_blank(b))
    }

    /// Parameter-list form: `name?: type = value`.
    pub fn arg_string(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let optional = if self.optional { "?" } else { "" };
        let value = match self.value.as_deref() {
            Some(v) if !is_blank(v) => format!("{sp}={sp}{v}"),
            _ => String::new(),
        };
        format!("{}{optional}:{sp}{}{value}", self.name, self.ty)
    }

    /// Interface member form: `name?: type;`.
    pub fn signature_string(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.layout.space();
        let optional = if self.optional { "?" } else { "" };
        format!(
            "{}{}{optional}:{sp}{};",
            ctx.layout.indent(),
            self.name,
            self.ty
        )
    }

    fn render_getter(&self, ctx: &RenderContext) -> String {
        let sp = ctx.layout.space();
        let nl = ctx.layout.newline();
        let ind = ctx.layout.indent();
        let st = if self.is_static { " static " } else { " " };
        let body = match self.getter_body.as_deref() {
            Some(body) => body.to_string(),
            None => format!("return this._{};", self.name),
        };
        format!(
            "{ind}{}{st}get {}():{sp}{}{sp}{{{nl}{ind}{ind}{body}{nl}{ind}}}",
            self.modifier.as_str(),
            self.name,
            self.ty
        )
    }

    fn render_setter(&self, ctx: &RenderContext) -> String {
        let sp = ctx.layout.space();
        let nl = ctx.layout.newline();
        let ind = ctx.layout.indent();
        let st = if self.is_static { " static " } else { " " };
        let mut out = format!(
            "{ind}{}{st}set {}(value:{sp}{}){sp}{{{nl}",
            self.modifier.as_str(),
            self.name,
            self.ty
        );
        match self.setter_body.as_deref() {
            None => {
                out += &format!("{ind}{ind}this._{}{sp}={sp}value;{nl}", self.name);
                if self.track {
                    let dirty = if self.track_state {
                        ctx.options.is_dirty.as_str()
                    } else {
                        ""
                    };
                    if !dirty.is_empty() {
                        out += &format!("{sp}this.{dirty}{sp}={sp}true;{nl}");
                    }
                    let last = if self.track_date {
                        ctx.options.last_updated.as_str()
                    } else {
                        ""
                    };
                    if !last.is_empty() {
                        out += &format!("{sp}this.{last}{sp}={sp}(new Date()).getTime();{nl}");
                    }
                }
            }
            Some(body) => {
                out += &format!("{ind}{ind}{body}{nl}");
            }
        }
        out += &format!("{ind}}}");
        out
    }
}

impl Render for Property {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }

        let sp = ctx.layout.space();
        let ind = ctx.layout.indent();
        let st = if self.is_static { " static " } else { " " };
        let accessors = self.uses_accessors();

        let mut parts = Vec::new();

        if self.declare {
            // A property without accessors (or with both read and write
            // disabled) is exposed as the field itself; otherwise the field
            // becomes a private backing store behind the accessors.
            let plain = (!self.read && !self.write) || !accessors;
            let modifier = if plain {
                self.modifier.as_str()
            } else {
                "private"
            };
            let prefix = if plain { "" } else { "_" };
            let value = match self.value.as_deref() {
                Some(v) => format!("{sp}={sp}{v}"),
                None => String::new(),
            };
            parts.push(format!(
                "{ind}{modifier}{st}{prefix}{}:{sp}{}{value};",
                self.name, self.ty
            ));
        }

        if accessors {
            if self.read {
                parts.push(self.render_getter(ctx));
            }
            if self.write {
                parts.push(self.render_setter(ctx));
            }
        }

        ctx.layout.join(&parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_renders_empty() {
        let p = Property::default();
        assert_eq!(p.render(&RenderContext::compact()), "");
        assert_eq!(p.arg_string(&RenderContext::compact()), "");
        assert_eq!(p.signature_string(&RenderContext::compact()), "");
    }

    #[test]
    fn test_plain_field_compact() {
        let p = Property::new("foo");
        assert_eq!(p.render(&RenderContext::compact()), "public foo:any;");
    }

    #[test]
    fn test_plain_field_pretty() {
        let p = Property::new("foo").typed("string").value("'x'");
        assert_eq!(
            p.render(&RenderContext::pretty()),
            "    public foo: string = 'x';"
        );
    }

    #[test]
    fn test_static_field() {
        let p = Property::new("count").typed("number").static_();
        assert_eq!(
            p.render(&RenderContext::compact()),
            "public static count:number;"
        );
    }

    #[test]
    fn test_tracked_property_compact() {
        let p = Property::new("foo").tracked();
        assert_eq!(
            p.render(&RenderContext::compact()),
            "private _foo:any;\
             public get foo():any{return this._foo;}\
             public set foo(value:any){this._foo=value;\
             this._isDirty=true;this._lastUpdated=(new Date()).getTime();}"
        );
    }

    #[test]
    fn test_tracked_property_pretty() {
        let p = Property::new("foo").tracked();
        assert_eq!(
            p.render(&RenderContext::pretty()),
            "    private _foo: any;\n\
             \x20   public get foo(): any {\n        return this._foo;\n    }\n\
             \x20   public set foo(value: any) {\n        this._foo = value;\n\
             \x20this._isDirty = true;\n\
             \x20this._lastUpdated = (new Date()).getTime();\n    }"
        );
    }

    #[test]
    fn test_track_suppression_flags() {
        let mut p = Property::new("foo").tracked();
        p.track_date = false;
        assert_eq!(
            p.render(&RenderContext::compact()),
            "private _foo:any;\
             public get foo():any{return this._foo;}\
             public set foo(value:any){this._foo=value;this._isDirty=true;}"
        );

        let mut p = Property::new("foo").tracked();
        p.track_state = false;
        assert_eq!(
            p.render(&RenderContext::compact()),
            "private _foo:any;\
             public get foo():any{return this._foo;}\
             public set foo(value:any){this._foo=value;\
             this._lastUpdated=(new Date()).getTime();}"
        );
    }

    #[test]
    fn test_configured_tracking_field_names() {
        let mut options = crate::Options::compact();
        options.is_dirty = "dirty".to_string();
        options.last_updated = String::new();
        let ctx = RenderContext::new(&options);
        let p = Property::new("foo").tracked();
        assert_eq!(
            p.render(&ctx),
            "private _foo:any;\
             public get foo():any{return this._foo;}\
             public set foo(value:any){this._foo=value;this.dirty=true;}"
        );
    }

    #[test]
    fn test_custom_getter_and_setter_bodies() {
        let p = Property::new("foo")
            .getter("return 1;")
            .setter("this._foo = Math.max(0, value);");
        assert_eq!(
            p.render(&RenderContext::compact()),
            "private _foo:any;\
             public get foo():any{return 1;}\
             public set foo(value:any){this._foo = Math.max(0, value);}"
        );
    }

    #[test]
    fn test_custom_setter_skips_tracking() {
        let p = Property::new("foo").tracked().setter("this._foo = value | 0;");
        let out = p.render(&RenderContext::compact());
        assert!(!out.contains("_isDirty"));
        assert!(!out.contains("_lastUpdated"));
        assert!(out.contains("this._foo = value | 0;"));
    }

    #[test]
    fn test_read_only_accessor() {
        let p = Property::new("foo").tracked().read_only();
        assert_eq!(
            p.render(&RenderContext::compact()),
            "private _foo:any;public get foo():any{return this._foo;}"
        );
    }

    #[test]
    fn test_no_read_no_write_keeps_plain_field() {
        let mut p = Property::new("foo").tracked();
        p.read = false;
        p.write = false;
        assert_eq!(p.render(&RenderContext::compact()), "public foo:any;");
    }

    #[test]
    fn test_no_declare() {
        let mut p = Property::new("foo").tracked();
        p.declare = false;
        assert_eq!(
            p.render(&RenderContext::compact()),
            "public get foo():any{return this._foo;}\
             public set foo(value:any){this._foo=value;\
             this._isDirty=true;this._lastUpdated=(new Date()).getTime();}"
        );
    }

    #[test]
    fn test_arg_string() {
        let ctx = RenderContext::compact();
        assert_eq!(Property::new("a").arg_string(&ctx), "a:any");
        assert_eq!(
            Property::new("a").typed("number").value("1").arg_string(&ctx),
            "a:number=1"
        );
        assert_eq!(
            Property::new("a").optional().arg_string(&RenderContext::pretty()),
            "a?: any"
        );
    }

    #[test]
    fn test_signature_string() {
        assert_eq!(
            Property::new("bar").optional().signature_string(&RenderContext::compact()),
            "bar?:any;"
        );
        assert_eq!(
            Property::new("bar").typed("string").signature_string(&RenderContext::pretty()),
            "    bar: string;"
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Property = serde_json::from_str(r#"{"name": "foo"}"#).unwrap();
        assert_eq!(p.ty, "any");
        assert!(p.declare);
        assert!(p.read && p.write);
        assert!(p.can_clone && p.can_export);
        assert!(!p.track);
        assert!(p.track_date && p.track_state);
    }

    #[test]
    fn test_deserialize_scalar_value() {
        let p: Property =
            serde_json::from_str(r#"{"name": "n", "type": "number", "value": 1}"#).unwrap();
        assert_eq!(p.value.as_deref(), Some("1"));
    }
}
