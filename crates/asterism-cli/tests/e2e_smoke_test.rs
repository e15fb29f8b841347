use std::fs;

use tempfile::tempdir;

use asterism_cli::{Args, run};

/// A small record set covering shared labels, duplicate relations, and an
/// isolated skill.
const SAMPLE_RECORDS: &str = r#"[
  { "primaryItem": "Rust", "relatedItems": ["CLI", "WASM"] },
  { "primaryItem": "CLI", "relatedItems": ["Rust"] },
  { "primaryItem": "Python" }
]"#;

#[test]
fn e2e_smoke_test_valid_records() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("skills.json");
    let output_path = temp_dir.path().join("layout.json");
    fs::write(&input_path, SAMPLE_RECORDS).expect("Failed to write records file");

    let args = Args {
        input: input_path.to_string_lossy().to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("Valid records should lay out cleanly");

    let artifact = fs::read_to_string(&output_path).expect("Failed to read layout artifact");
    let value: serde_json::Value =
        serde_json::from_str(&artifact).expect("Artifact should be JSON");

    let nodes = value["nodes"].as_array().expect("nodes should be an array");
    assert_eq!(nodes.len(), 4, "Rust, CLI, WASM, and Python are each one node");

    for node in nodes {
        assert!(node["label"].is_string());
        assert!(node["size"].is_number());

        let position = node["position"]
            .as_array()
            .expect("position should be an array");
        assert_eq!(position.len(), 3);
        for component in position {
            let component = component.as_f64().expect("component should be a number");
            assert!(component.is_finite());
        }
    }

    // The lowest node rests on the ground plane after normalization.
    let min_height = nodes
        .iter()
        .map(|node| node["position"][1].as_f64().expect("y should be a number"))
        .fold(f64::INFINITY, f64::min);
    assert!(
        min_height.abs() < 1e-6,
        "Lowest node should rest at height zero, got {min_height}"
    );

    // Rust->CLI and CLI->Rust describe the same edge and appear once.
    let edges = value["edges"].as_array().expect("edges should be an array");
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0][0], "Rust");
    assert_eq!(edges[0][1], "CLI");
    assert_eq!(edges[1][0], "Rust");
    assert_eq!(edges[1][1], "WASM");
}

#[test]
fn e2e_smoke_test_error_inputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_inputs = [
        ("not_json.json", "skills, not JSON"),
        ("not_an_array.json", r#"{ "primaryItem": "Rust" }"#),
        ("empty.json", "[]"),
        ("blank_label.json", r#"[ { "primaryItem": "   " } ]"#),
    ];

    let mut unexpectedly_succeeded = Vec::new();

    for (name, content) in &error_inputs {
        let input_path = temp_dir.path().join(name);
        let output_path = temp_dir.path().join(format!("error_{name}"));
        fs::write(&input_path, content).expect("Failed to write records file");

        let args = Args {
            input: input_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(*name);
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError inputs that unexpectedly succeeded:");
        for name in &unexpectedly_succeeded {
            eprintln!("  - {name}");
        }
        panic!(
            "{} error input(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_smoke_test_config_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("skills.json");
    fs::write(&input_path, SAMPLE_RECORDS).expect("Failed to write records file");

    // A valid override runs end to end.
    let valid_config_path = temp_dir.path().join("config.toml");
    fs::write(
        &valid_config_path,
        "[layout]\nmax_iterations = 3\nring_radius = 0.5\n",
    )
    .expect("Failed to write config file");

    let output_path = temp_dir.path().join("layout.json");
    let args = Args {
        input: input_path.to_string_lossy().to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: Some(valid_config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };
    run(&args).expect("Valid config override should lay out cleanly");
    assert!(output_path.exists());

    // An out-of-range override is rejected before any output is written.
    let invalid_config_path = temp_dir.path().join("bad_config.toml");
    fs::write(&invalid_config_path, "[layout]\ncool_down = 1.5\n")
        .expect("Failed to write config file");

    let rejected_output_path = temp_dir.path().join("rejected.json");
    let args = Args {
        input: input_path.to_string_lossy().to_string(),
        output: rejected_output_path.to_string_lossy().to_string(),
        config: Some(invalid_config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };
    assert!(run(&args).is_err(), "cool_down of 1.5 should be rejected");
    assert!(!rejected_output_path.exists());
}
