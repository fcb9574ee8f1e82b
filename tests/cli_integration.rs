//! CLI integration tests
//!
//! Tests the command-line interface end-to-end.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Get path to the z85 binary
fn z85_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_z85"))
}

/// Run z85 with the given arguments and no stdin attached
fn run_z85(args: &[&str]) -> Output {
    Command::new(z85_bin())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run z85")
}

/// Run z85 with `input` piped to stdin
fn run_z85_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(z85_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn z85");

    {
        let stdin = child.stdin.as_mut().expect("failed to open stdin");
        // Ignore BrokenPipe errors - the command may exit before reading stdin
        let _ = stdin.write_all(input);
    }

    child.wait_with_output().expect("failed to wait for z85")
}

const HELLO_BYTES: [u8; 8] = [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B];

#[test]
fn test_encode_from_args() {
    let result = run_z85(&["--mode", "encode", "864FD26FB559F75B"]);
    assert!(
        result.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(result.stdout, b"HelloWorld\n");
}

#[test]
fn test_encode_is_default_mode() {
    let result = run_z85(&["864fd26fb559f75b"]);
    assert!(result.status.success());
    assert_eq!(result.stdout, b"HelloWorld\n");
}

#[test]
fn test_decode_from_args() {
    let result = run_z85(&["--mode=decode", "HelloWorld"]);
    assert!(
        result.status.success(),
        "decode failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(result.stdout, HELLO_BYTES);
}

#[test]
fn test_decode_joins_args_with_space() {
    // "Hello World" is 11 characters, and the space is not in the alphabet anyway.
    let result = run_z85(&["-m", "decode", "Hello", "World"]);
    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
}

#[test]
fn test_encode_from_pipe() {
    let result = run_z85_with_stdin(&["--mode", "encode"], b"864fd26fb559f75b\n");
    assert!(
        result.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(result.stdout, b"HelloWorld\n");
}

#[test]
fn test_decode_from_pipe_reads_first_line() {
    let result = run_z85_with_stdin(&["--mode", "decode"], b"HelloWorld\nignored\n");
    assert!(result.status.success());
    assert_eq!(result.stdout, HELLO_BYTES);
}

/// /dev/null is a character device, not a pipe, so there is no input at all.
#[test]
#[cfg(unix)]
fn test_no_args_with_null_stdin_is_usage_error() {
    let result = run_z85(&["--mode", "encode"]);
    assert_eq!(result.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with("Usage:"), "unexpected stdout: {}", stdout);
}

#[test]
fn test_empty_pipe_encodes_empty_frame() {
    let result = run_z85_with_stdin(&["--mode", "encode"], b"");
    assert!(
        result.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(result.stdout, b"\n");
}

#[test]
fn test_invalid_mode_is_usage_error() {
    let result = run_z85(&["--mode", "compress", "00000000"]);
    assert_eq!(result.status.code(), Some(2));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_invalid_hex_fails() {
    let result = run_z85(&["--mode", "encode", "xyz"]);
    assert_eq!(result.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("hex"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_encode_unaligned_fails() {
    let result = run_z85(&["--mode", "encode", "0102030405"]);
    assert_eq!(result.status.code(), Some(3));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_decode_unaligned_fails() {
    let result = run_z85(&["--mode", "decode", "four"]);
    assert_eq!(result.status.code(), Some(3));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_decode_invalid_character_fails() {
    let result = run_z85(&["--mode", "decode", "~~~~~"]);
    assert_eq!(result.status.code(), Some(4));
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains('~'), "unexpected stderr: {}", stderr);
}

#[test]
fn test_text_roundtrip_through_binary() {
    let text = "JTKVSB%%)wK0E.X)V>+}o?pNmC{O&4W4b!Ni{Lh6";
    let decoded = run_z85(&["--mode", "decode", text]);
    assert!(decoded.status.success());

    let hex_input = hex::encode(&decoded.stdout);
    let encoded = run_z85(&["--mode", "encode", &hex_input]);
    assert!(encoded.status.success());
    assert_eq!(String::from_utf8_lossy(&encoded.stdout), format!("{}\n", text));
}
