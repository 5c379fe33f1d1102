use param_cleaner::{
    cleaner::{clean, NestedValue},
    cli::{self, CliArgs},
    filter::ExampleFilter,
    input::{load_endpoint, load_parameters, parse_parameters, InputFormat},
    serializer::{serialize_form, serialize_json, serialize_yaml},
};
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn field_names(value: &NestedValue) -> Vec<String> {
    value
        .as_map()
        .expect("expected a mapping")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn test_clean_parses_array_keys() {
    let parameters = load_parameters(&fixture("nested_parameters.json"), InputFormat::Json)
        .expect("Failed to load fixture");

    let cleaned = clean(&parameters);

    assert_eq!(
        cleaned.to_json(),
        json!({
            "object": {
                "key1": "43",
                "key2": 77,
                "key3": { "key1": "hoho" }
            },
            "list": [4],
            "list_of_objects": [
                { "key1": "John", "key2": false }
            ]
        })
    );
    assert_eq!(field_names(&cleaned), vec!["object", "list", "list_of_objects"]);
}

#[test]
fn test_clean_is_repeatable() {
    let parameters = load_parameters(&fixture("nested_parameters.json"), InputFormat::Json)
        .expect("Failed to load fixture");

    let first = serialize_json(&clean(&parameters)).unwrap();
    let second = serialize_json(&clean(&parameters)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_yaml_and_json_inputs_agree() {
    let parameters = load_parameters(&fixture("nested_parameters.json"), InputFormat::Json)
        .expect("Failed to load fixture");
    let yaml = serialize_yaml(&parameters).expect("Failed to serialize descriptors");

    let reloaded = parse_parameters(&yaml, InputFormat::Yaml).expect("Failed to parse YAML");

    assert_eq!(clean(&reloaded), clean(&parameters));
}

#[test]
fn test_endpoint_excluded_params_are_documented_but_not_exemplified() {
    let endpoint = load_endpoint(&fixture("endpoint.yaml"), InputFormat::Yaml)
        .expect("Failed to load endpoint fixture");

    let cleaned = endpoint.clean(&ExampleFilter::default());

    assert_eq!(cleaned.clean_url_parameters.to_json(), json!({ "room": 12 }));
    assert!(cleaned.clean_query_parameters.is_empty());
    assert_eq!(
        cleaned.clean_body_parameters.to_json(),
        json!({
            "included": "here",
            "guests": [{ "name": "Ada", "age": 36 }]
        })
    );

    let excluded = &endpoint.body_parameters["excluded_body_param"];
    assert_eq!(excluded.description.as_deref(), Some("Does not exist in examples."));
    assert!(endpoint.query_parameters.contains_key("excluded_query_param"));
}

#[test]
fn test_endpoint_keep_all_filter() {
    let endpoint = load_endpoint(&fixture("endpoint.yaml"), InputFormat::Yaml)
        .expect("Failed to load endpoint fixture");

    let cleaned = endpoint.clean(&ExampleFilter::keep_all());

    assert_eq!(
        cleaned.clean_query_parameters.to_json(),
        json!({ "excluded_query_param": null })
    );
    assert_eq!(
        field_names(&cleaned.clean_body_parameters),
        vec!["included", "excluded_body_param", "guests"]
    );
    assert_eq!(
        cleaned.clean_body_parameters.to_json()["guests"],
        json!([{ "name": "Ada", "age": 36, "phone": null }])
    );
}

#[test]
fn test_form_payload_end_to_end() {
    let parameters = load_parameters(&fixture("nested_parameters.json"), InputFormat::Json)
        .expect("Failed to load fixture");

    let form = serialize_form(&clean(&parameters));

    assert_eq!(
        form,
        "object[key1]=43&object[key2]=77&object[key3][key1]=hoho&list[0]=4\
         &list_of_objects[0][key1]=John&list_of_objects[0][key2]=false"
    );
}

#[test]
fn test_cli_endpoint_mode_writes_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("docs").join("examples.yaml");
    let input = fixture("endpoint.yaml");

    let args = CliArgs::try_parse_from([
        "param-cleaner",
        input.to_str().unwrap(),
        "--mode",
        "endpoint",
        "--format",
        "yaml",
        "--output",
        output.to_str().unwrap(),
    ])
    .expect("Failed to parse arguments");
    let args = cli::parse_args_from_parsed(args).expect("Arguments should be valid");

    cli::run(args).expect("Run should succeed");

    let content = std::fs::read_to_string(&output).expect("Output should exist");
    let written: serde_json::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(written["cleanBodyParameters"]["included"], "here");
    assert_eq!(written["cleanUrlParameters"]["room"], 12);
    assert_eq!(written["cleanQueryParameters"], json!({}));
}

#[test]
fn test_cli_params_mode_renders_json() {
    let input = fixture("nested_parameters.json");
    let args = CliArgs::try_parse_from(["param-cleaner", input.to_str().unwrap()])
        .expect("Failed to parse arguments");

    let rendered = cli::render(&args).expect("Render should succeed");

    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["list_of_objects"], json!([{ "key1": "John", "key2": false }]));
    assert!(rendered.find("\"object\"").unwrap() < rendered.find("\"list\"").unwrap());
}
