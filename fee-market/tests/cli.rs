//! End-to-end runs of the `generate-withdrawal-fee-vectors` binary.

use {
    std::{
        fs,
        path::Path,
        process::{Command, Output},
    },
    tempfile::TempDir,
};

const REFERENCE_FIXTURE: &str = include_str!("fixtures/eip7002_testvectors.json");

fn run_generator(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-withdrawal-fee-vectors"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

#[test]
fn writes_default_fixture_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tests/fixtures")).unwrap();

    let output = run_generator(&[], dir.path());
    assert!(output.status.success(), "{output:?}");

    let written = fs::read_to_string(dir.path().join("tests/fixtures/eip7002_testvectors.json")).unwrap();
    assert_eq!(written, REFERENCE_FIXTURE);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Generated 70 test vectors"));
    assert_eq!(lines.count(), 70);
}

#[test]
fn missing_output_directory_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("x.json");

    let output = run_generator(&["--output", path.to_str().unwrap()], dir.path());
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
    assert!(output.stdout.is_empty());
}

#[test]
fn default_path_without_fixture_directory_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    let output = run_generator(&[], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn check_accepts_fresh_and_rejects_stale_fixture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vectors.json");
    let path_arg = path.to_str().unwrap();

    fs::write(&path, REFERENCE_FIXTURE).unwrap();
    let output = run_generator(&["--output", path_arg, "--check"], dir.path());
    assert!(output.status.success(), "{output:?}");

    fs::write(&path, REFERENCE_FIXTURE.replace("12020397140344", "12020397140345")).unwrap();
    let output = run_generator(&["--output", path_arg, "--check"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    // --check never rewrites the file.
    assert_ne!(fs::read_to_string(&path).unwrap(), REFERENCE_FIXTURE);
}
