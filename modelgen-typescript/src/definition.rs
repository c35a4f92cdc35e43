//! Declarative program input.

use serde::Deserialize;
use thiserror::Error;

use crate::ast::{Class, Enum, Interface};
use crate::Options;
use crate::serde_helpers::defaulting_vec;

/// Errors raised while reading a declarative definition. Rendering itself
/// is infallible; only truly invalid top-level input is rejected.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid definition: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A whole-program description: formatting/naming options plus ordered
/// lists of enums, interfaces, and classes.
///
/// Every key is optional and unknown keys are ignored. List slots holding
/// `null` become default entities, which render as empty and vanish from
/// the assembled output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub options: Options,

    #[serde(deserialize_with = "defaulting_vec")]
    pub enums: Vec<Enum>,

    #[serde(deserialize_with = "defaulting_vec")]
    pub interfaces: Vec<Interface>,

    #[serde(deserialize_with = "defaulting_vec")]
    pub classes: Vec<Class>,
}

impl Definition {
    /// Parse a definition from its JSON text form.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Convert an already-parsed JSON value into a definition.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
