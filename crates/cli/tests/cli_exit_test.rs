use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iquery"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

// header with OPCODE=1, root name, type A, class IN, no payload
fn inverse_query_bytes() -> Vec<u8> {
    let mut bytes = vec![0x00, 0x01, 0x08, 0x00, 0, 0, 0, 1, 0, 0, 0, 0];
    bytes.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01, 0, 0, 0, 0, 0x00, 0x00]);
    bytes
}

fn workspace(flag: Option<&[u8]>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("iquery-file"), inverse_query_bytes()).unwrap();
    if let Some(flag) = flag {
        std::fs::write(dir.path().join("flag"), flag).unwrap();
    }
    dir
}

#[test]
fn test_well_formed_message_exits_zero() {
    let dir = workspace(Some(b"1\n"));

    let output = run(dir.path(), &["flag"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "opcode = 1",
            "req: IQuery class 1 type 1",
            "Copying 1 bytes from fname to anbuf which can store 2 bytes",
        ]
    );
}

#[test]
fn test_message_path_override() {
    let dir = workspace(Some(b"0"));
    std::fs::write(dir.path().join("other.bin"), [0u8; 12]).unwrap();

    let output = run(dir.path(), &["--message", "other.bin", "flag"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["opcode = 0", "We only support inverse queries!"]
    );
}

#[test]
fn test_missing_flag_file_is_fatal() {
    let dir = workspace(None);

    let output = run(dir.path(), &["flag"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_flag_file_is_fatal() {
    let dir = workspace(Some(b""));

    let output = run(dir.path(), &["flag"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_message_file_is_fatal() {
    let dir = workspace(Some(b"1"));

    let output = run(dir.path(), &["--message", "absent.bin", "flag"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = workspace(Some(b"1"));

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
}
