//! Basic CLI E2E tests.
//!
//! Tests invoke the built `unplug` binary with an isolated config directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with optional stdin and return (code, stdout, stderr).
fn run_cli(config_dir: &Path, args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_unplug"))
        .args(args)
        .env("UNPLUG_CONFIG_DIR", config_dir)
        .env_remove("UNPLUG_ENV")
        .env_remove("FLASK_ENV")
        .env_remove("SPOTIFY_API_KEY")
        .env_remove("FITBIT_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    {
        let mut pipe = child.stdin.take().expect("stdin");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }

    let output = child.wait_with_output().expect("wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_run_exit_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["run"], Some("Ada\n2\n5\n8\n"));
    assert_eq!(code, 0);
    assert!(stdout.contains("Welcome aboard the digital wellness journey, Ada!"));
    assert!(stdout.contains("📋 Digital Wellness Menu:"));
    assert!(stdout.trim_end().lines().last().unwrap().contains("✨ Farewell, Ada!"));
}

#[test]
fn test_run_handles_closed_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["run"], Some("Ada\n"));
    assert_eq!(code, 0);
    assert!(!stdout.contains("Farewell"));
}

#[test]
fn test_run_progress_report() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["run"], Some("Ada\n2\n5\n3\n8\n"));
    assert_eq!(code, 0);
    assert!(stdout.contains("• Daily Goal: 2.0 hours"));
    assert!(stdout.contains("• Estimated Usage: "));
    assert!(stdout.contains("→ Remember: Quality over quantity!"));
}

#[test]
fn test_analyze_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.jpg");
    let (code, stdout, _) = run_cli(dir.path(), &["analyze", missing.to_str().unwrap()], None);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("⚠️ Could not process image: "));
}

#[test]
fn test_analyze_bright_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bright.png");
    image::GrayImage::from_pixel(1024, 768, image::Luma([240]))
        .save(&path)
        .unwrap();

    let (code, stdout, _) = run_cli(dir.path(), &["analyze", path.to_str().unwrap()], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("• Size: 1024x768"));
    assert!(stdout.contains("• Average Brightness: 240.0/255"));
    assert!(!stdout.contains("Image appears dark"));
}

#[test]
fn test_suggest() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["suggest"], None);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("💡 Suggested activity: "));
}

#[test]
fn test_config_list_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "list"], None);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["server"]["port"], 5000);
    assert_eq!(json["session"]["image_path"], "user_image.jpg");
}

#[test]
fn test_config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "set", "server.port", "8080"], None);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "server.port"], None);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "8080");
}

#[test]
fn test_config_list_masks_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        dir.path(),
        &["config", "set", "credentials.openai", "sk-secret"],
        None,
    );
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(dir.path(), &["config", "list"], None);
    assert!(!stdout.contains("sk-secret"));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["credentials"]["openai"], "***");
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "server.port", "lots"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "nope", "1"], None);
    assert_eq!(code, 1);

    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "nope"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key: nope"));
}

#[test]
fn test_serve_rejects_invalid_goal() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["serve", "--goal", "30"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_reset_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "session.image_path", "desk.png"], None);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(dir.path(), &["config", "reset"], None);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("config reset to defaults"));

    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "session.image_path"], None);
    assert_eq!(stdout.trim(), "user_image.jpg");
}
