use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

pub const SELF_REF: &str = ".";
pub const PARENT_REF: &str = "..";

/// One visited node: its path, file name, and whether it is a directory.
///
/// The directory flag never follows symbolic links, so a link to a directory
/// reports `false` and is not descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemEntry {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
}

impl FilesystemEntry {
    /// Entry named after the last component of `path`.
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());
        FilesystemEntry { path, name, is_dir }
    }

    /// Entry whose name differs from its path's last component (`.`, `..`).
    pub fn named(path: PathBuf, name: &str, is_dir: bool) -> Self {
        FilesystemEntry {
            path,
            name: OsString::from(name),
            is_dir,
        }
    }

    /// Builds an entry from a directory listing. A file type that cannot be
    /// read is treated as "not a directory".
    pub fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        FilesystemEntry {
            path: entry.path(),
            name: entry.file_name(),
            is_dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &OsStr {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// `true` for a directory's reference to itself.
    pub fn is_self_ref(&self) -> bool {
        self.name == SELF_REF
    }

    /// `true` for a directory's reference to its parent.
    pub fn is_parent_ref(&self) -> bool {
        self.name == PARENT_REF
    }
}
