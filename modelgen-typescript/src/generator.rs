//! Whole-program assembly.

use modelgen_codegen::{ImportCollector, is_blank};

use crate::ast::Render;
use crate::{Definition, RenderContext, Result};

/// The assembled program plus the names of the entities it contains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateResult {
    pub enum_names: Vec<String>,
    pub interface_names: Vec<String>,
    /// Names of public classes only; base classes are rendered but not
    /// recorded here.
    pub class_names: Vec<String>,
    pub output: String,
}

/// The program assembler.
///
/// Renders every enum, then every interface, then every class, collects and
/// deduplicates their imports, and joins the fragments per the configured
/// layout. The formatting context is recomputed on each [`CodeGen::generate`]
/// call, so one engine can be re-rendered after an options change and two
/// engines with different settings can coexist.
#[derive(Debug, Clone, Default)]
pub struct CodeGen {
    definition: Definition,
}

impl CodeGen {
    pub fn new(definition: Definition) -> Self {
        Self { definition }
    }

    /// Build an engine straight from the JSON declarative form.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(Self::new(Definition::from_json(input)?))
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut Definition {
        &mut self.definition
    }

    /// Render the whole program to a single output string.
    pub fn generate(&self) -> GenerateResult {
        let ctx = RenderContext::new(&self.definition.options);
        let mut result = GenerateResult::default();
        let mut body = Vec::new();
        let mut imports = ImportCollector::new();

        for e in &self.definition.enums {
            let rendered = e.render(&ctx);
            if !rendered.is_empty() {
                result.enum_names.push(e.name.clone());
                body.push(rendered);
            }
        }

        for i in &self.definition.interfaces {
            let rendered = i.render(&ctx);
            if rendered.is_empty() {
                continue;
            }
            result.interface_names.push(i.name.clone());
            body.push(rendered);
            for import in &i.import {
                imports.add(&import.path, &import.name);
            }
        }

        for c in &self.definition.classes {
            let rendered = c.render(&ctx);
            if rendered.is_empty() {
                continue;
            }
            if !c.is_base_class {
                result.class_names.push(c.name.clone());
            }
            body.push(rendered);
            for import in &c.import {
                imports.add(&import.path, &import.name);
            }
        }

        let fragments: Vec<String> = [imports.render(&ctx.layout), ctx.layout.join(&body)]
            .into_iter()
            .filter(|s| !is_blank(s))
            .collect();
        result.output = ctx.layout.join(&fragments);
        result
    }
}
