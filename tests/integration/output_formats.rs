// tests/integration/output_formats.rs
use serde_json::Value;

use crate::common::{Inputs, numrange};

fn stdout_of(args: &[&str], stdin: &str) -> String {
    let output = numrange().args(args).write_stdin(stdin).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn json_range() {
    let json: Value = serde_json::from_str(&stdout_of(&["--format", "json"], "-500 3 5000")).unwrap();
    assert_eq!(json["kind"], "int");
    assert_eq!(json["bound"], "range");
    assert_eq!(json["overall"]["source"], "(all)");
    assert_eq!(json["overall"]["count"], 3);
    assert_eq!(json["overall"]["min"], -500);
    assert_eq!(json["overall"]["max"], 5000);
    assert!(json.get("inputs").is_none());
}

#[test]
fn json_per_file_min() {
    let inputs = Inputs::new();
    let a = inputs.write("a.txt", "4 8");
    let b = inputs.write("b.txt", "6");
    let a = a.to_str().unwrap();
    let b = b.to_str().unwrap();

    let json: Value =
        serde_json::from_str(&stdout_of(&["--format", "json", "--bound", "min", "--per-file", a, b], "")).unwrap();
    let entries = json["inputs"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["source"], a);
    assert_eq!(entries[0]["min"], 4);
    assert!(entries[0].get("max").is_none());
    assert_eq!(entries[1]["min"], 6);
    assert_eq!(json["overall"]["min"], 4);
}

#[test]
fn json_float_range() {
    let json: Value = serde_json::from_str(&stdout_of(&["--format", "json", "--kind", "float"], "0.5 -1.25")).unwrap();
    assert_eq!(json["kind"], "float");
    assert_eq!(json["overall"]["min"], -1.25);
    assert_eq!(json["overall"]["max"], 0.5);
}

#[test]
fn yaml_range() {
    let yaml = stdout_of(&["--format", "yaml"], "12");
    assert!(yaml.contains("kind: int"));
    assert!(yaml.contains("min: 12"));
    assert!(yaml.contains("max: 12"));
}

#[test]
fn csv_max_only() {
    let csv = stdout_of(&["--format", "csv", "--bound", "max"], "1 9 4");
    assert_eq!(csv, "source,count,min,max\n(all),3,,9\n");
}
