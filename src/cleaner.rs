//! Parameter tree cleaner.
//!
//! Converts a flat, ordered mapping of dotted/bracketed parameter paths into a nested
//! structure holding only example values, ready to be serialized as a sample request
//! or response body.
//!
//! Cleaning runs in two passes:
//!
//! 1. [`PathIndex::build`] registers every path under the key of the container it
//!    lives in, creating missing ancestors on the fly.
//! 2. [`PathIndex::materialize`] walks the index from the root and builds a
//!    [`NestedValue`] for each node according to its [`DescriptorKind`].
//!
//! The cleaner is total: malformed input yields best-effort output, never an error.
//! Entries that must not appear in examples have to be filtered out beforehand, see
//! [`crate::filter`].

use crate::descriptor::{DescriptorKind, ParameterDescriptor, ParameterMap};
use crate::path::{child_key, element_container_key, ParamPath};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

/// A cleaned example value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedValue {
    /// An example taken verbatim from a leaf descriptor
    Leaf(Value),
    /// Fields of an object, in first-occurrence order
    Map(IndexMap<String, NestedValue>),
    /// Elements of a list of objects
    List(Vec<NestedValue>),
}

impl NestedValue {
    pub fn as_map(&self) -> Option<&IndexMap<String, NestedValue>> {
        match self {
            NestedValue::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&NestedValue> {
        self.as_map().and_then(|fields| fields.get(field))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NestedValue::Leaf(value) => value.is_null(),
            NestedValue::Map(fields) => fields.is_empty(),
            NestedValue::List(items) => items.is_empty(),
        }
    }

    /// Converts into a `serde_json::Value`, keeping field order.
    pub fn to_json(&self) -> Value {
        match self {
            NestedValue::Leaf(value) => value.clone(),
            NestedValue::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
            NestedValue::List(items) => Value::Array(items.iter().map(NestedValue::to_json).collect()),
        }
    }
}

impl From<NestedValue> for Value {
    fn from(value: NestedValue) -> Self {
        value.to_json()
    }
}

/// Fields registered in one container, keyed by field name.
type Fields<'a> = IndexMap<String, Option<&'a ParameterDescriptor>>;

/// Prefix index over a parameter map.
///
/// Maps each container key (`""` for the root, `object.key3` for an object's fields,
/// `list_of_objects[]` for a list's element fields) to the ordered fields it holds.
/// A field without a descriptor is an ancestor that was never declared itself.
#[derive(Debug, Default)]
pub struct PathIndex<'a> {
    containers: IndexMap<String, Fields<'a>>,
}

impl<'a> PathIndex<'a> {
    pub fn build(parameters: &'a ParameterMap) -> Self {
        let mut index = PathIndex::default();

        for (raw_path, descriptor) in parameters {
            let path = ParamPath::parse(raw_path);
            if path.is_empty() {
                warn!("Skipping parameter with empty path: {:?}", raw_path);
                continue;
            }

            let depth = path.segments().len();
            for (i, segment) in path.segments().iter().enumerate() {
                let len = i + 1;
                let slot = index
                    .containers
                    .entry(path.container_key_at(len))
                    .or_default()
                    .entry(segment.name.clone())
                    .or_insert(None);

                if len == depth {
                    if slot.is_none() {
                        *slot = Some(descriptor);
                    } else {
                        debug!("Duplicate parameter path {}, keeping first declaration", raw_path);
                    }
                }
            }
        }

        debug!("Indexed {} parameter containers", index.containers.len());
        index
    }

    pub fn has_fields(&self, container_key: &str) -> bool {
        self.containers
            .get(container_key)
            .is_some_and(|fields| !fields.is_empty())
    }

    /// Builds the value of the root container.
    pub fn materialize(&self) -> NestedValue {
        self.build_object("")
    }

    fn build_object(&self, container_key: &str) -> NestedValue {
        let mut object = IndexMap::new();
        if let Some(fields) = self.containers.get(container_key) {
            for (name, descriptor) in fields {
                let node_key = child_key(container_key, name);
                object.insert(name.clone(), self.build_node(&node_key, *descriptor));
            }
        }
        NestedValue::Map(object)
    }

    fn build_node(&self, node_key: &str, descriptor: Option<&ParameterDescriptor>) -> NestedValue {
        let elements_key = element_container_key(node_key);

        let Some(descriptor) = descriptor else {
            // Undeclared ancestor: the shape follows whatever its descendants imply
            return if self.has_fields(&elements_key) {
                if self.has_fields(node_key) {
                    debug!(
                        "Ignoring object fields under {}, its element fields make it a list",
                        node_key
                    );
                }
                NestedValue::List(vec![self.build_object(&elements_key)])
            } else if self.has_fields(node_key) {
                self.build_object(node_key)
            } else {
                NestedValue::Leaf(Value::Null)
            };
        };

        match descriptor.kind() {
            DescriptorKind::Leaf => {
                if self.has_fields(node_key) || self.has_fields(&elements_key) {
                    debug!(
                        "Ignoring nested parameters under {} of type {}",
                        node_key, descriptor.param_type
                    );
                }
                NestedValue::Leaf(descriptor.example.clone())
            }
            DescriptorKind::Object => self.build_object(node_key),
            DescriptorKind::ObjectList { dimensions } => {
                let mut value = self.build_object(&elements_key);
                for _ in 0..dimensions {
                    value = NestedValue::List(vec![value]);
                }
                value
            }
        }
    }
}

/// Cleans a parameter map into a nested example structure.
///
/// The result is always a [`NestedValue::Map`] of the top-level parameters.
pub fn clean(parameters: &ParameterMap) -> NestedValue {
    debug!("Cleaning {} parameters", parameters.len());
    PathIndex::build(parameters).materialize()
}
