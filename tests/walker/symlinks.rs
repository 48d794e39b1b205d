// Integration tests for walker/mod.rs — symbolic links are visited, never
// descended into.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::symlink;

use btrcompressor::CompressionSetting;
use tempfile::TempDir;

use crate::common::{make_small_tree, reachable, sorted, walk_with, Recorder};

#[test]
fn link_to_directory_is_visited_not_followed() {
    let dir = make_small_tree();
    let other = TempDir::new().unwrap();
    fs::write(other.path().join("outside"), b"o").unwrap();
    let link = dir.path().join("link");
    symlink(other.path(), &link).unwrap();

    let (stats, rec) = walk_with(dir.path(), CompressionSetting::Zstd, Recorder::default());
    let paths = rec.paths();
    assert!(paths.contains(&link));
    assert!(!paths.iter().any(|p| p.ends_with("outside")));
    assert_eq!(stats.visited, 5);
}

#[test]
fn cyclic_link_terminates() {
    let dir = make_small_tree();
    symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

    let (_, rec) = walk_with(dir.path(), CompressionSetting::Lzo, Recorder::default());
    assert_eq!(sorted(rec.paths()), reachable(dir.path()));
}

#[test]
fn dangling_link_is_visited() {
    let dir = TempDir::new().unwrap();
    let link = dir.path().join("dangling");
    symlink(dir.path().join("nowhere"), &link).unwrap();

    let (stats, rec) = walk_with(dir.path(), CompressionSetting::Zlib, Recorder::default());
    assert_eq!(stats.visited, 2);
    assert!(rec.paths().contains(&link));
}

#[test]
fn linked_root_is_walked() {
    let dir = make_small_tree();
    let holder = TempDir::new().unwrap();
    let root_link = holder.path().join("root");
    symlink(dir.path(), &root_link).unwrap();

    let (stats, rec) = walk_with(&root_link, CompressionSetting::Zlib, Recorder::default());
    assert_eq!(stats.visited, 4);
    assert_eq!(rec.writes[0].path, root_link);
}

#[test]
fn dangling_root_is_visited_once() {
    let holder = TempDir::new().unwrap();
    let root_link = holder.path().join("gone");
    symlink(holder.path().join("nowhere"), &root_link).unwrap();

    let (stats, rec) = walk_with(&root_link, CompressionSetting::Zstd, Recorder::default());
    assert_eq!(stats.visited, 1);
    assert_eq!(rec.paths(), vec![root_link]);
}
