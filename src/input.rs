//! Loading parameter descriptors from JSON or YAML documents.

use crate::descriptor::ParameterMap;
use crate::endpoint::EndpointParameters;
use crate::error::{Error, Result};
use clap::ValueEnum;
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl InputFormat {
    /// Guesses the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

fn parse_document<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T> {
    let document: T = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(document)
}

/// Gives every unnamed descriptor its map key as name.
fn fill_names(parameters: &mut ParameterMap) {
    for (path, descriptor) in parameters.iter_mut() {
        if descriptor.name.is_empty() {
            descriptor.name = path.clone();
        }
    }
}

/// Parses a path-to-descriptor mapping.
pub fn parse_parameters(content: &str, format: InputFormat) -> Result<ParameterMap> {
    let mut parameters: ParameterMap = parse_document(content, format)?;
    fill_names(&mut parameters);
    debug!("Parsed {} parameter descriptors", parameters.len());
    Ok(parameters)
}

/// Parses an endpoint document with `urlParameters`, `queryParameters` and `bodyParameters`.
pub fn parse_endpoint(content: &str, format: InputFormat) -> Result<EndpointParameters> {
    let mut endpoint: EndpointParameters = parse_document(content, format)?;
    fill_names(&mut endpoint.url_parameters);
    fill_names(&mut endpoint.query_parameters);
    fill_names(&mut endpoint.body_parameters);
    Ok(endpoint)
}

fn read(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

fn with_file<T>(path: &Path, result: Result<T>) -> Result<T> {
    result.map_err(|err| match err {
        Error::SerializationError(message) => Error::ParseError {
            file: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

/// Loads a parameter mapping from a file.
pub fn load_parameters(path: &Path, format: InputFormat) -> Result<ParameterMap> {
    let content = read(path)?;
    with_file(path, parse_parameters(&content, format))
}

/// Loads an endpoint document from a file.
pub fn load_endpoint(path: &Path, format: InputFormat) -> Result<EndpointParameters> {
    let content = read(path)?;
    with_file(path, parse_endpoint(&content, format))
}
