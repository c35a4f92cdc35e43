//! Declarative-to-TypeScript model class renderer.
//!
//! Given an in-memory description of classes, interfaces, enums, properties,
//! methods, and decorators, this crate produces syntactically valid
//! TypeScript source as a string, in either a human-readable (prettified)
//! or minified layout. It is meant to back a build-time code-generation
//! step, e.g. producing typed model classes with change tracking from a
//! schema.
//!
//! # Usage
//!
//! ```
//! use modelgen_typescript::CodeGen;
//!
//! let definition = r#"{
//!     "options": { "prettify": false },
//!     "enums": [{ "name": "Color", "names": ["Red", "Green"] }]
//! }"#;
//!
//! let result = CodeGen::from_json(definition).unwrap().generate();
//! assert_eq!(result.output, "export enum Color{Red,Green}");
//! assert_eq!(result.enum_names, vec!["Color"]);
//! ```
//!
//! Entities can also be assembled with the fluent builders and rendered
//! individually:
//!
//! ```
//! use modelgen_typescript::{Class, Render, RenderContext};
//!
//! let class = Class::new("User").extends("Model");
//! let out = class.render(&RenderContext::compact());
//! assert_eq!(out, "export class User extends Model{constructor(){super();}}");
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - Entity data model and per-entity renderers
//! - [`Options`] / [`RenderContext`] - Formatting and naming knobs
//! - [`Definition`] - Declarative JSON input for a whole program
//! - [`CodeGen`] - Whole-program assembly (`generate`)

mod context;
mod definition;
mod generator;
mod options;
mod serde_helpers;

pub mod ast;

pub use ast::{
    Class, Decorator, DecoratorOption, Enum, EnumItem, ImportRef, Interface, Method, Modifier,
    Property, Render,
};
pub use context::RenderContext;
pub use definition::{Definition, Error, Result};
pub use generator::{CodeGen, GenerateResult};
pub use modelgen_codegen::Layout;
pub use options::Options;
