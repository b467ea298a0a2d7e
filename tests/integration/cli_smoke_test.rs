//! CLI Smoke Test
//!
//! Runs the compiled binary end to end: saved dumps through `parse`, and a
//! fake wallet through `stats`. Checks exit status and the rendered report.

use crate::common::fake_wallet::FakeNode;
use crate::common::{dump_with_blocks, signature_of_len};
use serial_test::serial;
use std::path::Path;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nock-mining-stats"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("NOCKSTATS_WALLET__SOCKET_PATH")
        .env_remove("NOCKSTATS_WALLET__TIMEOUT_SECONDS")
        .env_remove("NOCKSTATS_REPORT__MAX_DISPLAY_WIDTH")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_parse_ranks_miners_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let long = signature_of_len("pool", 132);
    let dump = dump_with_blocks(&[("solo-miner", 1), (long.as_str(), 3)]);
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, dump).unwrap();

    let output = run_cli(dir.path(), &["parse", "--input", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("⛏️  Nockchain Mining Statistics Analyzer\n"));
    assert!(text.contains(&"=".repeat(45)));
    assert!(text.contains("Miner Rankings (out of 4 full coinbase blocks):"));
    let shown = format!("{}...{}", &long[..16], &long[116..]);
    assert!(text.contains(&format!("  #1  {:<36}      3  75.0%", shown)));
    assert!(text.contains(&format!("  #2  {:<36}      1  25.0%", "solo-miner")));
    assert!(text.contains("  Total miners: 2"));
    assert!(text.contains("  Average blocks per miner: 2.0"));
}

#[test]
fn test_parse_reads_piped_stdin_without_hint() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dump_with_blocks(&[("piped-miner", 2)]);

    let mut child = Command::new(env!("CARGO_BIN_EXE_nock-mining-stats"))
        .arg("parse")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(dump.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(&format!("  #1  {:<36}      2 100.0%", "piped-miner")));
    assert!(!stderr(&output).contains("Ctrl-D"));
}

#[test]
fn test_parse_empty_dump_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    std::fs::write(&input, "").unwrap();

    let output = run_cli(dir.path(), &["parse", "--input", input.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No coinbase blocks found in wallet data."));
}

#[test]
fn test_parse_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, dump_with_blocks(&[("a", 2), ("b", 2)])).unwrap();

    let output = run_cli(
        dir.path(),
        &["parse", "--input", input.to_str().unwrap(), "--format", "json"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["total_blocks"], 4);
    assert_eq!(value["rankings"][0]["signature"], "a");
    assert_eq!(value["rankings"][1]["signature"], "b");
    assert_eq!(value["rankings"][1]["rank"], 2);
}

#[test]
fn test_parse_custom_width() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, dump_with_blocks(&[("0123456789abcdef", 1)])).unwrap();

    let output = run_cli(
        dir.path(),
        &["parse", "--input", input.to_str().unwrap(), "--width", "11"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("  #1  0123...cdef      1 100.0%"));
}

#[test]
fn test_parse_reads_config_file_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("nockstats.toml"),
        "[report]\nmax_display_width = 11\n",
    )
    .unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, dump_with_blocks(&[("0123456789abcdef", 1)])).unwrap();

    let output = run_cli(dir.path(), &["parse", "--input", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("0123...cdef"));
}

#[test]
fn test_parse_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["parse", "--input", "does-not-exist.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: I/O error"));
}

#[test]
fn test_stats_missing_socket_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("missing.sock");

    let output = run_cli(dir.path(), &["stats", "--socket", socket.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(&format!(
        "Error: socket not found at {}",
        socket.display()
    )));
    assert!(!stdout(&output).contains("Miner Rankings"));
}

#[test]
#[serial]
fn test_stats_against_fake_wallet() {
    let node = FakeNode::new();
    let wallet = node.wallet_printing(&dump_with_blocks(&[("p", 1), ("q", 2)]));

    let output = run_cli(
        node.path(),
        &[
            "stats",
            "--socket",
            node.socket_path.to_str().unwrap(),
            "--binary",
            wallet.to_str().unwrap(),
            "--timeout",
            "10",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Miner Rankings (out of 3 full coinbase blocks):"));
    assert!(text.contains(&format!("  #1  {:<36}      2  66.7%", "q")));
    assert!(text.contains(&format!("  #2  {:<36}      1  33.3%", "p")));
}

#[test]
#[serial]
fn test_stats_debug_logs_go_to_stderr() {
    let node = FakeNode::new();
    let wallet = node.wallet_printing(&dump_with_blocks(&[("p", 1)]));

    let output = run_cli(
        node.path(),
        &[
            "--debug",
            "stats",
            "--socket",
            node.socket_path.to_str().unwrap(),
            "--binary",
            wallet.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Retrieved"));
    assert!(!stdout(&output).contains("Retrieved"));
}
