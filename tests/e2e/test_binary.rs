//! Integration tests for the window-scatter binary.
//!
//! These run the compiled CLI and check its JSON / SVG / text output.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_window-scatter"))
}

/// Run the binary with optional stdin input. Returns the raw output.
fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = binary()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(input) = stdin {
        child
            .stdin
            .as_mut()
            .expect("stdin piped")
            .write_all(input.as_bytes())
            .expect("write stdin");
    }
    drop(child.stdin.take());
    child.wait_with_output().expect("wait for binary")
}

/// Run and assert success; returns stdout.
fn run_ok(args: &[&str], stdin: Option<&str>) -> String {
    let output = run(args, stdin);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

fn run_json(args: &[&str], stdin: Option<&str>) -> Vec<serde_json::Value> {
    let out = run_ok(args, stdin);
    serde_json::from_str(&out).expect("JSON output")
}

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("window-scatter-{}-{}", std::process::id(), name));
    path
}

#[test]
fn test_default_cards_in_bounds() {
    let recs = run_json(&["--seed", "7"], None);
    assert_eq!(recs.len(), 7);
    for rec in &recs {
        let x = rec["x"].as_f64().unwrap();
        let y = rec["y"].as_f64().unwrap();
        let w = rec["width"].as_f64().unwrap();
        let h = rec["height"].as_f64().unwrap();
        assert!(x >= 40.0 - 1e-9 && x + w <= 1920.0 - 40.0 + 1e-9);
        assert!(y >= 40.0 - 1e-9 && y + h <= 1080.0 - 40.0 + 1e-9);
    }
    assert_eq!(recs[0]["label"], "who-am-i");
}

#[test]
fn test_seed_is_reproducible() {
    let a = run_ok(&["--seed", "99", "--compact"], None);
    let b = run_ok(&["--seed", "99", "--compact"], None);
    assert_eq!(a, b);
    assert_eq!(a.lines().count(), 1);
}

#[test]
fn test_inline_items_and_size() {
    let recs = run_json(
        &["--items", "30%x100:a, 30x100:b", "-W", "1000", "-H", "800", "--seed", "1"],
        None,
    );
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[1]["label"], "b");
    assert_eq!(recs[0]["width"].as_f64().unwrap(), 300.0);
}

#[test]
fn test_items_from_stdin() {
    let recs = run_json(&["-", "--seed", "3"], Some(r#"[{"width": 20, "height": 120}]"#));
    assert_eq!(recs.len(), 1);
}

#[test]
fn test_items_from_file() {
    let path = temp_path("items.txt");
    std::fs::write(&path, "25x200\n18x200\n").unwrap();
    let recs = run_json(&[path.to_str().unwrap(), "--seed", "3"], None);
    std::fs::remove_file(&path).ok();
    assert_eq!(recs.len(), 2);
}

#[test]
fn test_zero_size_container_prints_empty_list() {
    let recs = run_json(&["-W", "0", "--seed", "1"], None);
    assert!(recs.is_empty());
}

#[test]
fn test_svg_format() {
    let out = run_ok(&["--format", "svg", "--seed", "5"], None);
    assert!(out.starts_with("<svg"));
    assert!(out.trim_end().ends_with("</svg>"));
    assert_eq!(out.matches("<g id=\"card-").count(), 7);
}

#[test]
fn test_ascii_format() {
    let out = run_ok(&["--format", "ascii", "-a", "--columns", "80", "--seed", "5"], None);
    let first = out.lines().next().unwrap();
    assert!(first.starts_with('+'));
    assert_eq!(first.chars().count(), 80);
    assert!(out.contains("experiences"));
}

#[test]
fn test_shuffles_still_produce_full_layout() {
    let recs = run_json(&["--shuffles", "3", "--seed", "8"], None);
    assert_eq!(recs.len(), 7);
}

#[test]
fn test_config_file() {
    let path = temp_path("config.json");
    std::fs::write(&path, r#"{"margin": 100, "anchors": []}"#).unwrap();
    let recs = run_json(&["--config", path.to_str().unwrap(), "--seed", "2"], None);
    std::fs::remove_file(&path).ok();
    assert_eq!(recs.len(), 7);
    for (i, rec) in recs.iter().enumerate() {
        assert!(rec["x"].as_f64().unwrap() >= 100.0 - 1e-9);
        assert_eq!(rec["col"].as_u64().unwrap() as usize, i % 4);
        assert_eq!(rec["row"].as_u64().unwrap() as usize, i / 4);
    }
}

#[test]
fn test_output_file() {
    let path = temp_path("out.json");
    run_ok(&["--seed", "4", "-o", path.to_str().unwrap()], None);
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let recs: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(recs.len(), 7);
}

#[test]
fn test_bad_items_fail() {
    let output = run(&["--items", "25x200, oops"], None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("oops"));
}

#[test]
fn test_bad_config_fails() {
    let path = temp_path("bad-config.json");
    std::fs::write(&path, r#"{"grid_cols": 0}"#).unwrap();
    let output = run(&["--config", path.to_str().unwrap()], None);
    std::fs::remove_file(&path).ok();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config"));
}
