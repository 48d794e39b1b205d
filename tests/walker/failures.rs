// Integration tests for walker/mod.rs — per-entry failures and trees that
// change underneath the walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use btrcompressor::{AttributeWriter, CompressionSetting};
use tempfile::TempDir;

use crate::common::{make_small_tree, reachable, sorted, walk_with, Recorder};

#[test]
fn refused_file_does_not_stop_siblings() {
    let dir = TempDir::new().unwrap();
    for name in ["a", "locked", "z"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    let (stats, rec) = walk_with(dir.path(), CompressionSetting::Zlib, Recorder::refusing(&["locked"]));
    assert_eq!(stats.visited, 4);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.succeeded(), 3);
    assert_eq!(sorted(rec.paths()), reachable(dir.path()));
}

#[test]
fn refused_directory_is_still_descended_into() {
    let dir = make_small_tree();
    let (stats, rec) = walk_with(dir.path(), CompressionSetting::Zstd, Recorder::refusing(&["sub"]));
    assert_eq!(stats.failed, 1);
    assert!(rec.paths().contains(&dir.path().join("sub/g")));
}

#[test]
fn every_write_failing_still_visits_everything() {
    struct AlwaysFails(usize);
    impl AttributeWriter for AlwaysFails {
        fn write_attribute(&mut self, _: &Path, _: &str, _: &[u8]) -> io::Result<()> {
            self.0 += 1;
            Err(io::Error::new(io::ErrorKind::Unsupported, "not btrfs"))
        }
    }

    let dir = make_small_tree();
    let (stats, writer) = walk_with(dir.path(), CompressionSetting::Lzo, AlwaysFails(0));
    assert_eq!(writer.0, 4);
    assert_eq!(stats.visited, 4);
    assert_eq!(stats.failed, 4);
}

/// Removes the directory it is asked to write on, as a concurrent `rm -rf`
/// would, before reporting the write as failed.
struct Vanishing {
    victim: PathBuf,
    seen: Vec<PathBuf>,
}

impl AttributeWriter for Vanishing {
    fn write_attribute(&mut self, path: &Path, _: &str, _: &[u8]) -> io::Result<()> {
        self.seen.push(path.to_path_buf());
        if path == self.victim {
            fs::remove_dir_all(path)?;
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(())
    }
}

#[test]
fn directory_removed_mid_walk_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("doomed/inner")).unwrap();
    fs::write(root.join("doomed/inner/x"), b"x").unwrap();
    fs::write(root.join("keep"), b"k").unwrap();

    let writer = Vanishing {
        victim: root.join("doomed"),
        seen: Vec::new(),
    };
    let (stats, writer) = walk_with(root, CompressionSetting::Zstd, writer);

    assert_eq!(stats.failed, 1);
    assert!(writer.seen.contains(&root.join("keep")));
    assert!(!writer.seen.contains(&root.join("doomed/inner")));
    assert_eq!(stats.visited, 3);
}

#[test]
fn missing_root_is_an_empty_walk() {
    let dir = TempDir::new().unwrap();
    let (stats, rec) = walk_with(&dir.path().join("absent"), CompressionSetting::Zstd, Recorder::default());
    assert_eq!(stats.visited, 0);
    assert!(rec.writes.is_empty());
}
