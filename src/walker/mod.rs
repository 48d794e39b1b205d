//! Explicit-stack, depth-first, pre-order tree walk.
//!
//! Each directory being listed owns a [`TraversalFrame`] on a [`WalkStack`].
//! The frame on top is always drained first, so a sub-directory is finished
//! before its parent's next entry is looked at. No recursion is involved;
//! memory grows with depth times the open listings, not with call frames.
//!
//! Every entry is visited exactly once, with two exceptions:
//! - `..` is never visited;
//! - `.` is visited only in the root frame, which is how the root itself gets
//!   the attribute. Sub-directories are visited through their parent's listing.
//!
//! Symbolic links are visited but never descended into. The walk takes no
//! snapshot: entries created or removed while it runs may be missed or fail
//! to update, and neither stops it.

pub mod entry;
pub mod frame;
pub mod stack;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::xattr::{AttributeSetter, AttributeWriter, SystemXattr};

pub use entry::FilesystemEntry;
pub use frame::TraversalFrame;
pub use stack::WalkStack;

/// Counters for one walk. Nothing is printed from these.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries the attribute was written (or attempted) on.
    pub visited: u64,
    /// Writes the filesystem rejected.
    pub failed: u64,
}

impl WalkStats {
    pub fn succeeded(&self) -> u64 {
        self.visited - self.failed
    }
}

/// Drives an [`AttributeSetter`] over a directory tree.
pub struct TreeWalker<'a, W> {
    config: &'a Config,
    setter: AttributeSetter<W>,
    /// Cleared once stdout or stderr refuses a line; the walk goes on silently.
    log: bool,
}

impl<'a, W: AttributeWriter> TreeWalker<'a, W> {
    pub fn new(config: &'a Config, writer: W) -> Self {
        TreeWalker {
            config,
            setter: AttributeSetter::new(writer),
            log: config.verbose,
        }
    }

    /// Visits `root` and everything below it. Never fails as a whole.
    ///
    /// A root that exists but is not a directory is visited on its own, and so
    /// is a dangling symbolic link. A root that cannot be listed produces an
    /// empty walk.
    pub fn walk(&mut self, root: &Path) -> WalkStats {
        let mut stats = WalkStats::default();

        if let Ok(meta) = fs::metadata(root).or_else(|_| fs::symlink_metadata(root)) {
            if !meta.is_dir() {
                let entry = FilesystemEntry::new(root.to_path_buf(), false);
                self.visit(&entry, &mut stats);
                return stats;
            }
        }

        let mut stack = WalkStack::with_root(root);
        loop {
            let depth = stack.depth();
            let Some(frame) = stack.top_mut() else {
                break;
            };
            let Some(entry) = frame.current().cloned() else {
                stack.pop();
                continue;
            };

            if (entry.is_self_ref() && depth > 1) || entry.is_parent_ref() {
                frame.advance();
                continue;
            }

            self.visit(&entry, &mut stats);
            frame.advance();

            if entry.is_dir() && !entry.is_self_ref() {
                stack.push(TraversalFrame::open(entry.path()));
            }
        }

        stats
    }

    fn visit(&mut self, entry: &FilesystemEntry, stats: &mut WalkStats) {
        let setting = self.config.setting;
        if self.log {
            let line = writeln!(
                io::stdout().lock(),
                "{} compression on {}",
                setting.action(),
                entry.path().display()
            );
            self.log = line.is_ok();
        }
        stats.visited += 1;
        if let Err(e) = self.setter.apply(entry, setting) {
            stats.failed += 1;
            if self.log {
                self.log = writeln!(io::stderr().lock(), "{}", e).is_ok();
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.setter.into_writer()
    }
}

/// Walks `config.root`, writing `config.setting` with `setxattr(2)`.
pub fn compress_recursively(config: &Config) -> WalkStats {
    TreeWalker::new(config, SystemXattr).walk(&config.root)
}
