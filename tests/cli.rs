//! Binary exit status and stream tests.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn fair_rps_bin() -> String {
    env!("CARGO_BIN_EXE_fair-rps").to_string()
}

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(fair_rps_bin())
        .args(args)
        .env_remove("FAIR_RPS_KEY_BYTES")
        .env_remove("FAIR_RPS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn fair-rps");

    // The process may exit before reading stdin; a broken pipe is fine then.
    if let Some(mut input) = child.stdin.take() {
        let _ = input.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("wait for fair-rps")
}

#[test]
fn test_too_few_moves_exits_with_usage() {
    let out = run(&["a", "b"], "");
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("odd"), "stderr: {}", stderr);
    assert!(stderr.contains("rock paper scissors"), "stderr: {}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn test_duplicate_moves_exit_nonzero() {
    let out = run(&["a", "a", "b"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unique"));
}

#[test]
fn test_even_move_count_exits_nonzero() {
    let out = run(&["rock", "paper", "scissors", "lizard"], "");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_exit_token_ends_cleanly() {
    let out = run(&["rock", "paper", "scissors"], "0\n");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("HMAC: "), "stdout: {}", stdout);
    assert!(stdout.contains("1 - rock"));
    assert!(stdout.trim_end().ends_with("Exiting game."));
}

#[test]
fn test_end_of_input_ends_cleanly() {
    let out = run(&["rock", "paper", "scissors"], "2\n");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Your move: paper"));
    assert!(stdout.contains("HMAC key: "));
}

#[test]
fn test_hyphenated_move_names_are_moves() {
    let out = run(&["rock", "-x", "paper"], "2\n0\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 - -x"));
    assert!(stdout.contains("Your move: -x"));
}
