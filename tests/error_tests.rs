//! Error scenario integration tests

use std::fs;
use std::path::Path;
use std::process::Command;

fn voice_memos_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_voice-memos"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("VOICE_MEMOS_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_missing_directory() {
    let home = tempfile::tempdir().unwrap();
    let output = voice_memos_bin(home.path())
        .arg("--dir")
        .arg(home.path().join("does-not-exist"))
        .arg("list")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to list recordings"),
        "Expected enumeration error, got: {}",
        stderr
    );
}

#[test]
fn delete_index_out_of_range() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("memos");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("a.wav"), b"RIFF").unwrap();

    let output = voice_memos_bin(home.path())
        .arg("--dir")
        .arg(&dir)
        .args(["delete", "5"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(dir.join("a.wav").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No recording at index 5"), "got: {}", stderr);
}

#[test]
fn play_index_out_of_range() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("memos");
    fs::create_dir_all(&dir).unwrap();

    let output = voice_memos_bin(home.path())
        .arg("--dir")
        .arg(&dir)
        .args(["play", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("0 available"), "got: {}", stderr);
}

#[test]
fn invalid_mode_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = voice_memos_bin(home.path())
        .args(["--mode", "stadium", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid audio mode"),
        "Expected error about invalid mode, got: {}",
        stderr
    );
}

#[test]
fn invalid_format_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = voice_memos_bin(home.path())
        .args(["--format", "caf", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid format"));
}

#[test]
fn config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = voice_memos_bin(home.path())
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_audio_mode() {
    let home = tempfile::tempdir().unwrap();
    let output = voice_memos_bin(home.path())
        .args(["config", "set", "audio_mode", "99"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid audio mode"), "got: {}", stderr);
}

#[test]
fn config_init_twice_fails() {
    let home = tempfile::tempdir().unwrap();

    let first = voice_memos_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = voice_memos_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));
}
