//! Whole-session scenarios: raw request bytes in, raw reply bytes out.
//!
//! These run the same path as the binary (`Session::start` then `serve`)
//! with fake engines, so they need no Python installation.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use pyfix_config::FormatterId;
use pyfix_core::{Session, serve};
use pyfix_engine::EngineError;
use pyfix_test_utils::{TestProject, fake_engines};
use serde_json::json;

fn run(session: Session, input: &str) -> String {
    let mut output = Vec::new();
    serve(session, Cursor::new(input.as_bytes().to_vec()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn run_in(project: &TestProject, input: &str) -> String {
    run(Session::start(Ok(fake_engines()), project.root()), input)
}

#[test]
fn unconfigured_project_gets_sorted_imports() {
    let project = TestProject::new();
    let reply = run_in(
        &project,
        r#"{"cmd":"fix","source":"import b\nimport a\n","black_then_isort":true}"#,
    );
    assert_eq!(reply, r#"{"file":"import a\nimport b\n"}"#);
}

#[test]
fn unknown_command_is_reported_by_name() {
    let project = TestProject::new();
    let reply = run_in(&project, r#"{"cmd":"bogus"}"#);
    assert_eq!(
        reply,
        r#"{"notification":"error","message":"bogus","detail":"Unknown command bogus"}"#
    );
}

#[test]
fn policy_without_config_returns_source_verbatim() {
    let project = TestProject::new();
    let file = project.write_file("deep/er/mod.py", "");
    let source = "import b\nimport a\nx = 'unformatted'   \n";
    let input = json!({
        "cmd": "fix",
        "filePath": file,
        "onlyWhenAProjectConfigIsFound": true,
        "source": source,
        "black_then_isort": true,
    });

    let reply = run_in(&project, &input.to_string());
    assert_eq!(reply, json!({"file": source}).to_string());
}

#[test]
fn missing_engines_stop_before_reading() {
    let session = Session::start(
        Err(EngineError::Unavailable {
            python: "python3 or python (no interpreter found)".to_string(),
            missing: vec![FormatterId::Black, FormatterId::Isort],
        }),
        "/",
    );

    let reply = run(session, r#"{"cmd":"fix","source":"import b\n"}"#);
    assert_eq!(
        reply,
        json!({
            "notification": "error",
            "message": "black/isort not found",
            "detail": "You must install isort and black for python3 or python (no interpreter found)",
        })
        .to_string()
    );
}

#[test]
fn config_error_fails_closed() {
    let project = TestProject::new();
    project.init_git();
    project.isort_cfg("profile = black\n");

    let reply = run_in(
        &project,
        &json!({"cmd": "fix", "source": "import b\nimport a\n"}).to_string(),
    );
    let reply: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(reply["message"], "config error");
    assert!(reply["detail"].as_str().unwrap().contains(".isort.cfg"));
}

#[test]
fn fix_without_source_is_an_invalid_request() {
    let project = TestProject::new();
    let reply = run_in(&project, r#"{"cmd":"fix","black_then_isort":true}"#);
    let reply: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(reply["message"], "invalid request");
}
