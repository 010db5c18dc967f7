mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let found = env.run_json(&["find", "--no-export"]);
    assert_eq!(found["ok"], true);
    validate("candidates.schema.json", &found["data"]);

    let shortname = env.run_json(&["shortname", "https://www.w3.org/TR/css-grid-2/"]);
    assert_eq!(shortname["ok"], true);
    validate("shortname.schema.json", &shortname["data"]);

    let known = env.run_json(&["lookup", "https://www.w3.org/TR/css-grid-2/"]);
    assert_eq!(known["ok"], true);
    assert_eq!(known["data"]["known"], true);
    validate("lookup.schema.json", &known["data"]);

    let unknown = env.run_json(&["lookup", "https://www.w3.org/TR/fresh-thing/"]);
    assert_eq!(unknown["data"]["known"], false);
    validate("lookup.schema.json", &unknown["data"]);
}
