//! Writing the compression attribute on a single filesystem entry.
//!
//! [`AttributeSetter`] owns the attribute key and turns a
//! [`CompressionSetting`] into a payload. The actual write goes through the
//! [`AttributeWriter`] trait so the walk can be exercised without a btrfs
//! mount; [`SystemXattr`] is the `setxattr(2)` implementation.

pub mod sys;

use std::io;
use std::path::Path;

use crate::compression::CompressionSetting;
use crate::config::compression_xattr_name;
use crate::error::AttributeError;
use crate::walker::FilesystemEntry;

pub use sys::{set_xattr, SystemXattr};

/// Destination for extended-attribute writes.
pub trait AttributeWriter {
    /// Sets attribute `name` on `path` to `value`, creating or replacing it.
    fn write_attribute(&mut self, path: &Path, name: &str, value: &[u8]) -> io::Result<()>;
}

impl<W: AttributeWriter + ?Sized> AttributeWriter for &mut W {
    fn write_attribute(&mut self, path: &Path, name: &str, value: &[u8]) -> io::Result<()> {
        (**self).write_attribute(path, name, value)
    }
}

/// Applies a compression setting to one entry at a time.
#[derive(Debug)]
pub struct AttributeSetter<W> {
    writer: W,
    name: String,
}

impl<W: AttributeWriter> AttributeSetter<W> {
    pub fn new(writer: W) -> Self {
        AttributeSetter {
            writer,
            name: compression_xattr_name(),
        }
    }

    /// Attribute key written by [`apply`](Self::apply).
    pub fn attribute_name(&self) -> &str {
        &self.name
    }

    /// Writes `setting` on `entry`.
    ///
    /// The write replaces whatever value was there, so repeating it is
    /// harmless. A rejected write is returned to the caller, who decides
    /// whether it matters; nothing is read back.
    pub fn apply(
        &mut self,
        entry: &FilesystemEntry,
        setting: CompressionSetting,
    ) -> Result<(), AttributeError> {
        self.writer
            .write_attribute(entry.path(), &self.name, setting.as_bytes())
            .map_err(|e| AttributeError::new(entry.path(), e))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
