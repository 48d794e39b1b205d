// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `btrcompressor` binary as a black box. Scratch directories are
// usually not on btrfs, so attribute writes fail; the tests rely on the fact
// that such failures never change the exit code and count visits through the
// `-v` lines instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `btrcompressor` binary produced by Cargo.
fn bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_btrcompressor") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("btrcompressor");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .output()
        .expect("failed to run btrcompressor")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

/// Paths named on `-v` lines starting with `verb` ("enable"/"disable").
fn visited(o: &Output, verb: &str) -> Vec<PathBuf> {
    let prefix = format!("{verb} compression on ");
    let mut paths: Vec<PathBuf> = stdout(o)
        .lines()
        .filter_map(|l| l.strip_prefix(prefix.as_str()))
        .map(PathBuf::from)
        .collect();
    paths.sort();
    paths
}

fn any_visit_line(o: &Output) -> bool {
    stdout(o).contains("compression on ")
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

// ── 1. Empty directory, -c zstd ──────────────────────────────────────────────

#[test]
fn empty_dir_enable_zstd_visits_root_once() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-v", "-c", "zstd", s(dir.path())]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(visited(&out, "enable"), vec![dir.path().to_path_buf()]);
}

// ── 2. Small tree, -d ────────────────────────────────────────────────────────

#[test]
fn small_tree_disable_visits_four_entries() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("f"), b"f").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/g"), b"g").unwrap();

    let out = run(&["-v", "-d", s(root)]);
    assert!(out.status.success());
    let mut expected = vec![
        root.to_path_buf(),
        root.join("f"),
        root.join("sub"),
        root.join("sub/g"),
    ];
    expected.sort();
    assert_eq!(visited(&out, "disable"), expected);
}

// ── 3. Bogus compression ─────────────────────────────────────────────────────

#[test]
fn bogus_compression_exits_1_without_visiting() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-v", "-c", "bogus", s(dir.path())]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("error: invalid compression chosen (bogus)"));
    assert!(stderr(&out).contains("Usage:"));
    assert!(!any_visit_line(&out));
}

// ── 4. Negative thread count ─────────────────────────────────────────────────

#[test]
fn negative_threads_exits_1_without_visiting() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-v", "-j", "-1", "-c", "zlib", s(dir.path())]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("error: invalid number of threads (-1)"));
    assert!(stderr(&out).contains("Usage:"));
    assert!(!any_visit_line(&out));
}

// ── Thread flag is inert ─────────────────────────────────────────────────────

#[test]
fn positive_threads_warns_and_runs() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-j", "4", "-v", "-c", "lzo", s(dir.path())]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("warning: threading is not implemented yet."));
    assert_eq!(visited(&out, "enable").len(), 1);
}

// ── Usage errors ─────────────────────────────────────────────────────────────

#[test]
fn missing_path_exits_1() {
    let out = run(&["-c", "zstd"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("no file or directory given"));
}

#[test]
fn no_compression_flag_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = run(&[s(dir.path())]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage:"));
}

#[test]
fn unknown_flag_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-x", "-d", s(dir.path())]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid option -- 'x'"));
    assert!(stderr(&out).contains("Usage:"));
}

// ── Help / version ───────────────────────────────────────────────────────────

#[test]
fn help_exits_0_on_stdout() {
    let out = run(&["-h"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("Usage: "));
}

#[test]
fn version_exits_0() {
    let out = run(&["-V"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));
}

// ── Quiet by default ─────────────────────────────────────────────────────────

#[test]
fn no_output_without_verbose() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f"), b"f").unwrap();
    let out = run(&["-c", "zstd", s(dir.path())]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).is_empty());
}

#[test]
fn extra_operands_are_ignored_with_warning() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let out = run(&["-v", "-d", s(a.path()), s(b.path())]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("warning: ignoring extra operand"));
    assert_eq!(visited(&out, "disable"), vec![a.path().to_path_buf()]);
}

// ── Closed output ────────────────────────────────────────────────────────────

#[test]
fn verbose_into_closed_pipe_exits_0() {
    use std::io::{BufRead, BufReader};
    use std::process::Stdio;

    // Enough `-v` output to outgrow the pipe buffer once the reader is gone.
    let dir = TempDir::new().unwrap();
    for i in 0..3000 {
        fs::write(dir.path().join(format!("file-with-a-long-name-{i:05}")), b"").unwrap();
    }

    let mut child = Command::new(bin())
        .args(["-v", "-c", "zstd", s(dir.path())])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut first = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut first)
        .unwrap();
    assert!(first.starts_with("enable compression on "));

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
}
