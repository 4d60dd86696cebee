//! Integration tests for the `tl` binary.
//!
//! Each test pipes a script into `tl` over stdin and checks stdout. The config
//! directory points at a temp dir so no user config is picked up.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tl"))
}

/// Run `tl` with the given args and stdin script.
fn run_tl(args: &[&str], script: &str) -> (Output, TempDir) {
    let tmp = TempDir::new().unwrap();
    let mut child = Command::new(tl_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", tmp.path())
        .env_remove("TASKLEDGER_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tl");
    // tl may exit before reading stdin (e.g. on a config error)
    let written = child.stdin.take().unwrap().write_all(script.as_bytes());
    if let Err(e) = written {
        assert_eq!(e.kind(), ErrorKind::BrokenPipe, "writing stdin: {e}");
    }
    let output = child.wait_with_output().unwrap();
    (output, tmp)
}

fn stdout_of(args: &[&str], script: &str) -> String {
    let (output, _tmp) = run_tl(args, script);
    assert!(output.status.success(), "tl failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn search_scenario() {
    let out = stdout_of(
        &[],
        "\
add \"Write report\" 2025-01-10 High
add \"Buy milk\" 2025-01-05 low
search buy milk
search 2025-01-10
search nonexistent
",
    );
    assert_eq!(
        out,
        "\
Added: Write report (Due: 2025-01-10, Priority: High)
Added: Buy milk (Due: 2025-01-05, Priority: Low)
Task found: Buy milk (Due: 2025-01-05, Priority: Low)
Task found: Write report (Due: 2025-01-10, Priority: High)
No matching task.
"
    );
}

#[test]
fn delete_undo_restores_at_end() {
    let out = stdout_of(
        &[],
        "\
add A 2025-01-01 High
add B 2025-01-02 Medium
delete 1
peek
undo
list
",
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], "Deleted: A (Due: 2025-01-01, Priority: High)");
    assert_eq!(lines[3], "Last action: A (Due: 2025-01-01, Priority: High)");
    assert_eq!(lines[4], "Undid: A (Due: 2025-01-01, Priority: High)");
    assert!(lines[5].starts_with("  1. B "));
    assert!(lines[6].starts_with("  2. A "));
    assert_eq!(lines.len(), 7);
}

#[test]
fn completed_backlog_is_fifo() {
    let out = stdout_of(
        &[],
        "\
add A 2025-01-01 High
add B 2025-01-02 Low
complete 1
complete 1
completed
dequeue
dequeue
dequeue
",
    );
    assert_eq!(
        out,
        "\
Added: A (Due: 2025-01-01, Priority: High)
Added: B (Due: 2025-01-02, Priority: Low)
Task completed (enqueued): A (Due: 2025-01-01, Priority: High)
Task completed (enqueued): B (Due: 2025-01-02, Priority: Low)
Completed Tasks:
- A (Due: 2025-01-01, Priority: High)
- B (Due: 2025-01-02, Priority: Low)
Removed oldest completed: A (Due: 2025-01-01, Priority: High)
Removed oldest completed: B (Due: 2025-01-02, Priority: Low)
No completed tasks to dequeue.
"
    );
}

#[test]
fn validation_errors_do_not_stop_the_session() {
    let out = stdout_of(
        &[],
        "\
add A 2024-02-30 High
add A 2024-02-29 urgent
add A 2024-02-29 high
",
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("error: Invalid date format!"));
    assert!(lines[1].starts_with("error: invalid priority 'urgent'"));
    assert_eq!(lines[2], "Added: A (Due: 2024-02-29, Priority: High)");
}

#[test]
fn json_output() {
    let out = stdout_of(&["--json"], "add A 2025-01-01 medium\nlist\n");
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["task"]["priority"], "Medium");
    assert_eq!(lines[1]["tasks"][0]["position"], 1);
    assert_eq!(lines[1]["tasks"][0]["name"], "A");
}

#[test]
fn config_file_sets_search_mode_and_json() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.toml");
    fs::write(
        &config_path,
        "[output]\njson = true\n\n[search]\nmode = \"all\"\n",
    )
    .unwrap();

    let out = stdout_of(
        &["--config", config_path.to_str().unwrap()],
        "add \"Buy milk\" 2025-01-05 Low\nsearch milk\n",
    );
    let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
    assert_eq!(last["message"], "Found 1 task:");
    assert_eq!(last["tasks"][0]["name"], "Buy milk");
}

#[test]
fn missing_config_file_fails() {
    // A long script makes it likely tl exits before the write finishes
    let script = "list\n".repeat(50_000);
    let (output, _tmp) = run_tl(&["--config", "/nonexistent/taskledger.toml"], &script);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: could not read"));
}

#[test]
fn quit_ends_session() {
    let out = stdout_of(&[], "add A 2025-01-01 Low\nexit\nlist\n");
    assert_eq!(out, "Added: A (Due: 2025-01-01, Priority: Low)\n");
}
