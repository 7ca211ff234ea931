//! Runs the compiled binary.
//!
//! The standard output is not a terminal here, so the report is not colored.
use std::process::{Command, Output};

fn apiconnector(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apiconnector"))
        .args(args)
        .output()
        .expect("it should run the apiconnector binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn it_should_print_the_usage_and_fail_without_targets() {
    let output = apiconnector(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: apiconnector <service1> <service2> ..."));
    assert!(!stdout(&output).contains("=== API CONNECTIVITY TEST ==="));
}

#[test]
fn it_should_fail_when_a_target_is_unreachable() {
    let output = apiconnector(&["svc=http://127.0.0.1:1/"]);

    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("=== API CONNECTIVITY TEST ===\n\n"));
    assert!(stdout.contains("svc                  FAIL ("));
    assert!(stdout.contains("Summary: 0 OK, 1 FAIL"));
    assert!(stdout.contains("Error: 1 connection failures"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn it_should_succeed_when_every_target_is_reachable() {
    let output = apiconnector(&["cache=redis", "queue=rabbitmq"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Summary: 2 OK, 0 FAIL"));
}

#[test]
fn it_should_print_the_results_as_json() {
    let output = apiconnector(&["--json", "cache=redis", "broken"]);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("the standard output should be a JSON array");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json[0]["service"], "cache");
    assert_eq!(json[0]["status"], "OK");
    assert_eq!(json[1]["service"], "");
    assert_eq!(json[1]["status"], "ERROR");
    assert_eq!(json[1]["error"], "Invalid URL");
    assert!(stderr(&output).contains("Error: 1 connection failures"));
}

#[test]
fn it_should_dial_the_port_of_a_url_with_any_scheme() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("it should bind an ephemeral port");
    let port = listener.local_addr().expect("it should have a local address").port();

    let output = apiconnector(&[&format!("db=postgres://127.0.0.1:{port}")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("db                   OK ("));
    assert!(stdout(&output).contains("Summary: 1 OK, 0 FAIL"));
}
