//! Param Cleaner - Example payloads from flat API parameter descriptors.
//!
//! API documentation tools describe request and response parameters as a flat list of
//! dotted/bracketed paths, each with a type tag and an example value:
//!
//! ```text
//! object                  object
//! object.key1             string     "43"
//! list_of_objects         object[]
//! list_of_objects[].key1  string     "John"
//! ```
//!
//! This library turns such a list into the nested example payload it describes:
//! `{"object": {"key1": "43"}, "list_of_objects": [{"key1": "John"}]}`.
//!
//! # Architecture
//!
//! 1. [`input`] - Loads descriptors from JSON or YAML documents
//! 2. [`descriptor`] - Typed descriptors and type tags
//! 3. [`filter`] - Drops descriptors that must not appear in examples
//! 4. [`path`] - The dotted/bracketed path grammar
//! 5. [`cleaner`] - Builds the nested example structure
//! 6. [`endpoint`] - Cleans the URL, query and body groups of an endpoint
//! 7. [`serializer`] - Renders results as JSON, YAML or a form payload
//!
//! # Example Usage
//!
//! ```
//! use param_cleaner::{
//!     cleaner::clean,
//!     descriptor::{ParameterDescriptor, ParameterMap},
//!     filter::ExampleFilter,
//!     serializer::serialize_json,
//! };
//! use serde_json::json;
//!
//! let mut parameters = ParameterMap::new();
//! for (name, param_type, example) in [
//!     ("object", "object", json!({})),
//!     ("object.key1", "string", json!("43")),
//!     ("list_of_objects", "object[]", json!([])),
//!     ("list_of_objects[].key1", "string", json!("John")),
//! ] {
//!     let descriptor = ParameterDescriptor::new(name, param_type.parse().unwrap(), example);
//!     parameters.insert(name.to_string(), descriptor);
//! }
//!
//! let cleaned = clean(&ExampleFilter::default().apply(&parameters));
//! assert_eq!(
//!     cleaned.to_json(),
//!     json!({ "object": { "key1": "43" }, "list_of_objects": [{ "key1": "John" }] })
//! );
//! println!("{}", serialize_json(&cleaned).unwrap());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod input;
pub mod descriptor;
pub mod filter;
pub mod path;
pub mod cleaner;
pub mod endpoint;
pub mod serializer;
pub mod error;
