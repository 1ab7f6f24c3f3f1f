// tests/cli_check.rs
//! Exit codes and output of the `layerguard` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn workspace_with_cycle() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let base = dir.path().join("src/main/java/org/acme/bc");
    fs::create_dir_all(base.join("order/domain")).expect("mkdir domain");
    fs::create_dir_all(base.join("order/infra")).expect("mkdir infra");
    fs::write(
        base.join("order/domain/Order.java"),
        "package org.acme.bc.order.domain;\nimport org.acme.bc.order.infra.OrderDao;\n",
    )
    .expect("write Order");
    fs::write(
        base.join("order/infra/OrderDao.java"),
        "package org.acme.bc.order.infra;\nimport org.acme.bc.order.domain.Order;\n",
    )
    .expect("write OrderDao");
    fs::write(
        dir.path().join("layerguard.toml"),
        "[project]\nmodule_package = \"org.acme.bc\"\n",
    )
    .expect("write layerguard.toml");
    dir
}

fn run(root: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_layerguard"))
        .arg(root)
        .args(extra)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute layerguard")
}

#[test]
fn findings_still_exit_zero_and_write_report() {
    let dir = workspace_with_cycle();
    let output = run(dir.path(), &["--quiet"]);

    assert!(output.status.success(), "findings must not fail the run");
    let report = fs::read_to_string(dir.path().join("dependency-check-report.json"))
        .expect("report should exist");
    let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    assert_eq!(value["statistics"]["circular_dependency_count"], 1);
    assert_eq!(value["statistics"]["layer_violation_count"], 2);
    assert_eq!(value["modules_analyzed"][0], "order");
}

#[test]
fn json_flag_prints_report() {
    let dir = workspace_with_cycle();
    let output = run(dir.path(), &["--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not valid JSON: {e}\n---\n{stdout}"));

    for key in [
        "timestamp",
        "modules_analyzed",
        "statistics",
        "circular_dependencies",
        "layer_violations",
        "module_dependencies",
        "dependency_matrix",
    ] {
        assert!(value.get(key).is_some(), "missing '{key}'");
    }
    assert_eq!(value["layer_violations"][0]["type"], "DOMAIN_DEPENDS_ON_INFRA");
}

#[test]
fn summary_lists_cycles_and_kinds() {
    let dir = workspace_with_cycle();
    let output = run(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("DEPENDENCY CHECK"));
    assert!(stdout.contains("org.acme.bc.order.domain.Order -> "));
    assert!(stdout.contains("LAYER_INVERSION: 1"));
    assert!(stdout.contains("DOMAIN_DEPENDS_ON_INFRA: 1"));
}

#[test]
fn unwritable_report_exits_with_write_code() {
    let dir = workspace_with_cycle();
    let output = run(
        dir.path(),
        &["--quiet", "--output", "no/such/dir/report.json"],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn missing_module_root_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let output = run(dir.path(), &["--quiet"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = workspace_with_cycle();
    let output = run(dir.path(), &["--quiet", "--config", "nope.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        !dir.path().join("dependency-check-report.json").exists(),
        "no report should be written with a bad --config"
    );
}

#[test]
fn empty_module_root_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("src/main/java/com/jiuxi/module")).expect("mkdir");
    let output = run(dir.path(), &["--quiet"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn log_file_receives_log_lines() {
    let dir = workspace_with_cycle();
    let log = dir.path().join("dependency-check.log");
    let log_arg = log.to_string_lossy().into_owned();
    let output = run(dir.path(), &["--quiet", "--verbose", "--log-file", &log_arg]);

    assert!(output.status.success());
    let content = fs::read_to_string(&log).expect("log file should exist");
    assert!(content.contains("modules found"), "log was:\n{content}");
    assert!(content.contains("report written"));
}
