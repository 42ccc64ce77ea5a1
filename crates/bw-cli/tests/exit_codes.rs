//! Run the `bewell` binary against a stub registry and check stdout and exit codes.

use std::path::Path;
use std::process::{Command, Output};
use std::time::Duration;

use bw_registry::testing::{StubRegistry, closed_port_url};
use pretty_assertions::assert_eq;

const QUERY: &str = "type Query { world: String }";

fn schema_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.graphql"), QUERY).unwrap();
    dir
}

/// `bewell` with the config layers isolated to `cwd`.
fn bewell(cwd: &Path, args: &[&str]) -> Output {
    bewell_with_env(cwd, args, &[])
}

fn bewell_with_env(cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bewell"));
    command
        .current_dir(cwd)
        .args(args)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join("xdg"))
        .env_remove("BEWELL_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("BEWELL_") {
            command.env_remove(key);
        }
    }
    command.envs(vars.iter().copied());
    command.output().expect("bewell binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn valid_schema_exits_zero() {
    let dir = schema_dir();
    let stub = StubRegistry::respond_with(200, r#"{"success": true, "message": "ok"}"#);

    let output = bewell(
        dir.path(),
        &[
            "service",
            "-n",
            "bewell",
            "-u",
            "https://bewell-test.com",
            "-v",
            "0.0.1",
            "validate-schema",
            "--registry-url",
            &stub.base_url,
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Schema for service bewell version 0.0.1 is valid"
    );

    let sent = stub.captured().expect("registry should be called");
    assert_eq!(sent.path, "/schema/validate");
    let body: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
    assert_eq!(body["type_defs"], format!("{QUERY}\n"));
}

#[test]
fn rejected_push_exits_one_with_message() {
    let dir = schema_dir();
    let stub = StubRegistry::respond_with(200, r#"{"success": false, "message": "version exists"}"#);

    let output = bewell(
        dir.path(),
        &[
            "service",
            "push-schema",
            "--name",
            "bewell",
            "--url",
            "https://bewell-test.com",
            "--version",
            "0.0.2",
            "--registry-url",
            &stub.base_url,
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Schema for bewell version 0.0.2 has not been published\nMessage: version exists"
    );
    assert_eq!(stub.captured().unwrap().path, "/schema/push");
}

#[test]
fn incomplete_service_fails_without_contacting_registry() {
    let dir = schema_dir();
    let stub = StubRegistry::listening_for(Duration::from_millis(300));

    let output = bewell(
        dir.path(),
        &["service", "-n", "bewell", "validate-schema", "--registry-url", &stub.base_url],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with(
        "error validating schema: missing required service details (--url, --version)"
    ));
    assert!(stub.captured().is_none());
}

#[test]
fn config_file_supplies_service_details() {
    let dir = schema_dir();
    let stub = StubRegistry::respond_with(200, r#"{"success": true}"#);
    std::fs::create_dir(dir.path().join(".bewell")).unwrap();
    std::fs::write(
        dir.path().join(".bewell/config.toml"),
        format!(
            "[service]\nname = \"bewell\"\nurl = \"https://bewell-test.com\"\nversion = \"0.0.3\"\n\n[registry]\nurl = \"{}\"\n",
            stub.base_url
        ),
    )
    .unwrap();

    let output = bewell(dir.path(), &["--format", "raw", "service", "push-schema"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["operation"], "publish");
    assert_eq!(value["version"], "0.0.3");
    assert_eq!(value["valid"], true);
    assert!(stub.captured().is_some());
}

#[test]
fn unreachable_registry_reports_error() {
    let dir = schema_dir();
    let registry = closed_port_url();

    let output = bewell(
        dir.path(),
        &[
            "service", "-n", "bewell", "-u", "https://bewell-test.com", "-v", "0.0.1",
            "push-schema", "--registry-url", &registry,
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("error pushing schema: "));
}

#[test]
fn create_is_not_implemented() {
    let dir = tempfile::tempdir().unwrap();

    let output = bewell(dir.path(), &["service", "create", "-n", "bewell"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not implemented"));
}

#[test]
fn numeric_env_version_is_overridden_by_flag() {
    let dir = schema_dir();
    let stub = StubRegistry::respond_with(200, r#"{"success": true}"#);

    let output = bewell_with_env(
        dir.path(),
        &[
            "service", "-n", "bewell", "-u", "https://bewell-test.com", "-v", "3",
            "validate-schema", "--registry-url", &stub.base_url,
        ],
        &[("BEWELL_SERVICE__VERSION", "2")],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Schema for service bewell version 3 is valid"
    );
    let body: serde_json::Value = serde_json::from_str(&stub.captured().unwrap().body).unwrap();
    assert_eq!(body["version"], "3");
}
