/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("fireworks"),
        "Help output should mention fireworks"
    );
    assert!(
        stdout.contains("--seed"),
        "Help output should list the seed flag"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_flag_fails_gracefully() {
    let output = Command::new("cargo")
        .args(["run", "--", "--no-such-flag"])
        .output()
        .expect("Failed to execute cargo run");

    // Should fail with a usage error, not panic
    assert!(
        !output.status.success(),
        "Unknown flag should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Unknown flag should not cause panic"
    );
}
