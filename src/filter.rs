//! Pre-cleaning filters.
//!
//! The cleaner assumes every descriptor it receives belongs in the example payload.
//! [`ExampleFilter`] removes those that do not, before [`crate::cleaner::clean`] runs.

use crate::descriptor::{DescriptorKind, ParameterMap};
use crate::path::ParamPath;
use log::debug;
use std::collections::HashSet;

/// Selects which descriptors are dropped before cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleFilter {
    /// Drop descriptors marked `exclude_from_examples`, together with their nested fields
    pub drop_excluded: bool,
    /// Drop optional leaf descriptors that have no example value
    pub drop_optional_without_example: bool,
}

impl Default for ExampleFilter {
    fn default() -> Self {
        Self {
            drop_excluded: true,
            drop_optional_without_example: true,
        }
    }
}

impl ExampleFilter {
    /// A filter that keeps every descriptor.
    pub fn keep_all() -> Self {
        Self {
            drop_excluded: false,
            drop_optional_without_example: false,
        }
    }

    /// Returns a filtered copy of `parameters`, preserving order.
    pub fn apply(&self, parameters: &ParameterMap) -> ParameterMap {
        let excluded_nodes: HashSet<String> = if self.drop_excluded {
            parameters
                .iter()
                .filter(|(_, descriptor)| descriptor.exclude_from_examples)
                .map(|(path, _)| ParamPath::parse(path).node_key())
                .collect()
        } else {
            HashSet::new()
        };

        let filtered: ParameterMap = parameters
            .iter()
            .filter(|(raw_path, descriptor)| {
                let path = ParamPath::parse(raw_path);

                if !excluded_nodes.is_empty()
                    && (excluded_nodes.contains(&path.node_key())
                        || path
                            .ancestor_keys()
                            .iter()
                            .any(|key| excluded_nodes.contains(key)))
                {
                    debug!("Excluding {} from examples", raw_path);
                    return false;
                }

                if self.drop_optional_without_example
                    && !descriptor.required
                    && descriptor.example.is_null()
                    && descriptor.kind() == DescriptorKind::Leaf
                {
                    debug!("Dropping optional parameter {} without example", raw_path);
                    return false;
                }

                true
            })
            .map(|(path, descriptor)| (path.clone(), descriptor.clone()))
            .collect();

        debug!(
            "Filtered parameters: kept {} of {}",
            filtered.len(),
            parameters.len()
        );
        filtered
    }
}
