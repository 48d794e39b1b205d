// config.rs — Compile-time constants and the immutable run configuration.
//
// The only process-wide state is the parsed command line. It is validated once
// into a `Config` and handed to the walker by reference.

use std::path::PathBuf;

use crate::compression::CompressionSetting;

// Namespace prefix under which btrfs exposes its inode properties.
pub const XATTR_BTRFS_PREFIX: &str = "btrfs.";

// Property name for the per-inode compression algorithm.
pub const XATTR_COMPRESSION_NAME: &str = "compression";

// Number of threads used when `-j` is not given.
// Threading is not implemented; any positive value behaves like 1.
pub const THREADS_DEFAULT: u32 = 1;

/// Returns the full attribute key, `btrfs.compression`.
pub fn compression_xattr_name() -> String {
    format!("{XATTR_BTRFS_PREFIX}{XATTR_COMPRESSION_NAME}")
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File or directory the walk starts from.
    pub root: PathBuf,
    /// Compression to record on every visited entry.
    pub setting: CompressionSetting,
    /// Requested worker count. Accepted and validated, but the walk always
    /// runs on the calling thread.
    pub threads: u32,
    /// Print one line per visited entry.
    pub verbose: bool,
}

impl Config {
    /// Builds a single-threaded, quiet configuration.
    pub fn new(root: impl Into<PathBuf>, setting: CompressionSetting) -> Self {
        Config {
            root: root.into(),
            setting,
            threads: THREADS_DEFAULT,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
