//! Per-endpoint parameter groups.
//!
//! An endpoint documents its URL, query and body parameters separately; each group is
//! filtered and cleaned on its own.

use crate::cleaner::{clean, NestedValue};
use crate::descriptor::ParameterMap;
use crate::filter::ExampleFilter;
use log::debug;
use serde::{Deserialize, Serialize};

/// Parameter descriptors extracted for a single endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointParameters {
    #[serde(default)]
    pub url_parameters: ParameterMap,
    #[serde(default)]
    pub query_parameters: ParameterMap,
    #[serde(default)]
    pub body_parameters: ParameterMap,
}

/// Example payloads for each parameter group of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedParameters {
    pub clean_url_parameters: NestedValue,
    pub clean_query_parameters: NestedValue,
    pub clean_body_parameters: NestedValue,
}

impl EndpointParameters {
    pub fn is_empty(&self) -> bool {
        self.url_parameters.is_empty()
            && self.query_parameters.is_empty()
            && self.body_parameters.is_empty()
    }

    pub fn clean(&self, filter: &ExampleFilter) -> CleanedParameters {
        debug!(
            "Cleaning endpoint parameters: {} url, {} query, {} body",
            self.url_parameters.len(),
            self.query_parameters.len(),
            self.body_parameters.len()
        );

        CleanedParameters {
            clean_url_parameters: clean(&filter.apply(&self.url_parameters)),
            clean_query_parameters: clean(&filter.apply(&self.query_parameters)),
            clean_body_parameters: clean(&filter.apply(&self.body_parameters)),
        }
    }
}
