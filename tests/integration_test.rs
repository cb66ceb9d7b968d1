//! Integration tests for manifests, writing and the command executors

use std::fs;
use std::path::Path;

use dotgraph::common::ConfigBuilder;
use dotgraph::config::{EmitOptions, RenderOptions};
use dotgraph::executors::CommandExecutor;
use dotgraph::executors::emit::EmitExecutor;
use dotgraph::executors::render::RenderExecutor;
use dotgraph::manifest::GraphManifest;
use dotgraph::reports::{DependentsReport, JsonReportGenerator, ReportGenerator};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SERVICES: &str = r#"
name = "services"
label = "service map"
node_defaults = ["shape = box"]

[[nodes]]
name = "db"
attributes = ["shape = cylinder"]

[[edges]]
path = ["web", "api", "db"]

[[edges]]
path = ["worker", "db"]
attributes = ["style = dashed"]
"#;

fn write_manifest(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("services.toml");
    fs::write(&path, SERVICES).unwrap();
    path
}

#[test]
fn manifest_round_trip_to_dot() {
    let temp_dir = TempDir::new().unwrap();
    let graph = GraphManifest::load_graph(&write_manifest(temp_dir.path())).unwrap();

    let expected = [
        "digraph services",
        "  {",
        "    label = \"service map\";",
        "    node [ shape = box ];",
        "    \"db\" [ shape = cylinder ];",
        "    \"web\" -> \"api\";",
        "    \"api\" -> \"db\";",
        "    \"worker\" -> \"db\" [ style = dashed ];",
        "  }",
    ]
    .join("\n");
    assert_eq!(graph.to_text(), expected);
}

#[test]
fn emit_executor_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(temp_dir.path());
    let output = temp_dir.path().join("services.dot");

    let config = EmitOptions::builder()
        .with_manifest(manifest.clone())
        .with_output(Some(output.clone()))
        .build()
        .unwrap();
    EmitExecutor::execute(config).unwrap();

    let graph = GraphManifest::load_graph(&manifest).unwrap();
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        format!("{}\n", graph.to_text())
    );
}

#[test]
fn emit_executor_inverts() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(temp_dir.path());
    let output = temp_dir.path().join("inverted.dot");

    let config = EmitOptions::builder()
        .with_manifest(manifest)
        .with_invert(true)
        .with_output(Some(output.clone()))
        .build()
        .unwrap();
    EmitExecutor::execute(config).unwrap();

    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("\"db\" -> \"api\";"));
    assert!(text.contains("\"db\" -> \"worker\";"));
    assert!(!text.contains("shape = box"));
}

#[test]
fn render_executor_without_format_only_writes_dot() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("services");

    let config = RenderOptions::builder()
        .with_manifest(write_manifest(temp_dir.path()))
        .with_output(base)
        .with_format(None)
        .with_renderer("dotgraph-no-such-renderer".to_string())
        .build()
        .unwrap();
    RenderExecutor::execute(config).unwrap();

    assert!(temp_dir.path().join("services.dot").exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[cfg(unix)]
#[test]
fn render_executor_runs_renderer() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("services");

    let config = RenderOptions::builder()
        .with_manifest(write_manifest(temp_dir.path()))
        .with_output(base)
        .with_format(Some("png".to_string()))
        .with_renderer("true".to_string())
        .build()
        .unwrap();
    RenderExecutor::execute(config).unwrap();

    assert!(temp_dir.path().join("services.dot").exists());
    assert!(temp_dir.path().join("services.png").exists());
}

#[cfg(unix)]
#[test]
fn render_executor_reports_renderer_failure() {
    let temp_dir = TempDir::new().unwrap();

    let config = RenderOptions::builder()
        .with_manifest(write_manifest(temp_dir.path()))
        .with_output(temp_dir.path().join("services"))
        .with_format(Some("svg".to_string()))
        .with_renderer("false".to_string())
        .build()
        .unwrap();
    let err = RenderExecutor::execute(config).unwrap_err();

    assert!(
        err.chain()
            .any(|cause| cause.to_string().contains("false -Tsvg"))
    );
}

#[test]
fn render_executor_reports_bad_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("broken.toml");
    fs::write(&manifest, "edges = [{ path = [\"lonely\"] }]").unwrap();

    let config = RenderOptions::builder()
        .with_manifest(manifest)
        .with_output(temp_dir.path().join("broken"))
        .with_format(None)
        .with_renderer("dot".to_string())
        .build()
        .unwrap();

    assert!(RenderExecutor::execute(config).is_err());
    assert!(!temp_dir.path().join("broken.dot").exists());
}

#[test]
fn dependents_report_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let graph = GraphManifest::load_graph(&write_manifest(temp_dir.path())).unwrap();

    let report = DependentsReport::from_graph(&graph, "db");
    let json = JsonReportGenerator::new().generate_report(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["dependents"], serde_json::json!(["api", "worker"]));
}
