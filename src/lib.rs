// btrcompressor — recursively set the btrfs compression property

pub mod config;
pub mod error;
pub mod compression;
pub mod xattr;
pub mod walker;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the version string of this build.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use compression::CompressionSetting;
pub use config::Config;
pub use error::{AttributeError, InvalidAlgorithm};
pub use walker::{compress_recursively, TreeWalker, WalkStats};
pub use xattr::{AttributeSetter, AttributeWriter, SystemXattr};
