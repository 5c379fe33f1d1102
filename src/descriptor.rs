//! Typed parameter descriptors.
//!
//! A descriptor is the metadata record for one documented parameter: its type tag,
//! an example value and a few informational fields. Type tags are parsed once, when
//! the descriptor is deserialized, into a [`ParamType`], so that later stages only ever
//! match on [`DescriptorKind`].

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Ordered mapping of parameter paths to their descriptors.
///
/// Iteration order is declaration order, which decides field order in the cleaned output.
pub type ParameterMap = IndexMap<String, ParameterDescriptor>;

/// Base type of a parameter, before any array dimensions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseType {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
    Object,
    File,
}

impl BaseType {
    fn as_str(&self) -> &'static str {
        match self {
            BaseType::String => "string",
            BaseType::Integer => "integer",
            BaseType::Number => "number",
            BaseType::Boolean => "boolean",
            BaseType::Object => "object",
            BaseType::File => "file",
        }
    }
}

/// A parameter type tag such as `integer`, `object` or `object[]`.
///
/// `dimensions` counts the trailing `[]` markers, so `string[]` is a one-dimensional
/// array of strings and `object[][]` is a list of lists of objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParamType {
    pub base: BaseType,
    pub dimensions: usize,
}

/// How a descriptor contributes to the cleaned tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// Scalars, files and scalar arrays: the example is used verbatim
    Leaf,
    /// An object whose fields are described by nested descriptors
    Object,
    /// A list of objects whose element fields are described by `[]` descriptors
    ObjectList { dimensions: usize },
}

impl ParamType {
    pub fn new(base: BaseType) -> Self {
        Self { base, dimensions: 0 }
    }

    pub fn array_of(base: BaseType) -> Self {
        Self { base, dimensions: 1 }
    }

    pub fn kind(&self) -> DescriptorKind {
        match (self.base, self.dimensions) {
            (BaseType::Object, 0) => DescriptorKind::Object,
            (BaseType::Object, dimensions) => DescriptorKind::ObjectList { dimensions },
            _ => DescriptorKind::Leaf,
        }
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        let mut base_name = normalized.as_str();
        let mut dimensions = 0;
        while let Some(stripped) = base_name.strip_suffix("[]") {
            base_name = stripped.trim_end();
            dimensions += 1;
        }

        let base = match base_name {
            "string" => BaseType::String,
            "integer" | "int" => BaseType::Integer,
            "number" | "float" | "double" => BaseType::Number,
            "boolean" | "bool" => BaseType::Boolean,
            "object" => BaseType::Object,
            "file" => BaseType::File,
            _ => return Err(Error::InvalidType(tag.to_string())),
        };

        Ok(Self { base, dimensions })
    }
}

impl TryFrom<String> for ParamType {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<ParamType> for String {
    fn from(param_type: ParamType) -> Self {
        param_type.to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

/// Metadata for a single documented parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Display name; filled from the map key when left empty
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: ParamType,
    #[serde(default)]
    pub example: Value,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marks a parameter that is documented but must not appear in example payloads
    #[serde(
        default,
        alias = "excludeFromExamples",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub exclude_from_examples: bool,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, param_type: ParamType, example: Value) -> Self {
        Self {
            name: name.into(),
            param_type,
            example,
            required: false,
            description: None,
            exclude_from_examples: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn excluded_from_examples(mut self) -> Self {
        self.exclude_from_examples = true;
        self
    }

    pub fn kind(&self) -> DescriptorKind {
        self.param_type.kind()
    }
}
