// e2e/error_handling.rs — per-entry failures never change the exit code.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

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

#[test]
fn nonexistent_root_exits_0() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let out = Command::new(bin())
        .args(["-v", "-c", "zstd"])
        .arg(&missing)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).is_empty());
}

#[cfg(unix)]
#[test]
fn failed_writes_are_reported_only_with_verbose() {
    // setxattr(2) follows the dangling link and fails with ENOENT on any
    // filesystem, btrfs included.
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f"), b"f").unwrap();
    let dang = dir.path().join("dang");
    std::os::unix::fs::symlink(dir.path().join("nowhere"), &dang).unwrap();

    let quiet = Command::new(bin())
        .args(["-c", "zstd"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());

    let verbose = Command::new(bin())
        .args(["-v", "-c", "zstd"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(verbose.status.success());
    let err = String::from_utf8_lossy(&verbose.stderr);
    assert!(err.contains(&format!("cannot set compression on {}", dang.display())));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_does_not_stop_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let locked = root.join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden"), b"h").unwrap();
    fs::write(root.join("visible"), b"v").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let out = Command::new(bin())
        .args(["-v", "-d"])
        .arg(root)
        .output()
        .unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(&format!("disable compression on {}", root.join("visible").display())));
    assert!(stdout.contains(&format!("disable compression on {}", locked.display())));
}
