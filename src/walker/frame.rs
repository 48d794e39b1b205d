//! Per-directory iteration cursor.
//!
//! A frame yields, in order, the directory's reference to itself (`.`), its
//! reference to its parent (`..`), then every entry the OS lists. The `.`
//! entry carries the directory's own path so that visiting it touches the
//! directory itself.
//!
//! A directory that cannot be opened produces an already exhausted frame. A
//! listing that fails part-way ends the frame at that point.

use std::fs;
use std::path::{Path, PathBuf};

use super::entry::{FilesystemEntry, PARENT_REF, SELF_REF};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    SelfRef,
    ParentRef,
    Listing,
}

#[derive(Debug)]
pub struct TraversalFrame {
    dir: PathBuf,
    stage: Stage,
    listing: Option<fs::ReadDir>,
    current: Option<FilesystemEntry>,
}

impl TraversalFrame {
    /// Opens `dir` and positions the cursor on its first entry.
    pub fn open(dir: &Path) -> Self {
        match fs::read_dir(dir) {
            Ok(listing) => {
                let mut frame = TraversalFrame {
                    dir: dir.to_path_buf(),
                    stage: Stage::SelfRef,
                    listing: Some(listing),
                    current: None,
                };
                frame.advance();
                frame
            }
            Err(_) => TraversalFrame {
                dir: dir.to_path_buf(),
                stage: Stage::Listing,
                listing: None,
                current: None,
            },
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Entry under the cursor, `None` once exhausted.
    pub fn current(&self) -> Option<&FilesystemEntry> {
        self.current.as_ref()
    }

    /// Moves the cursor forward. Does nothing on an exhausted frame.
    pub fn advance(&mut self) {
        self.current = match self.stage {
            Stage::SelfRef => {
                self.stage = Stage::ParentRef;
                Some(FilesystemEntry::named(self.dir.clone(), SELF_REF, true))
            }
            Stage::ParentRef => {
                self.stage = Stage::Listing;
                Some(FilesystemEntry::named(
                    self.dir.join(PARENT_REF),
                    PARENT_REF,
                    true,
                ))
            }
            Stage::Listing => self.next_listed(),
        };
    }

    fn next_listed(&mut self) -> Option<FilesystemEntry> {
        let listing = self.listing.as_mut()?;
        match listing.next() {
            Some(Ok(entry)) => Some(FilesystemEntry::from_dir_entry(&entry)),
            Some(Err(_)) | None => {
                self.listing = None;
                None
            }
        }
    }
}
