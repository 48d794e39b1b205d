//! `setxattr(2)` binding.
//!
//! The call follows symbolic links, so a link entry has the attribute applied
//! to its target (or fails when the link dangles).

use std::io;
use std::path::Path;

use super::AttributeWriter;

/// Writes attributes on the live filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemXattr;

impl AttributeWriter for SystemXattr {
    fn write_attribute(&mut self, path: &Path, name: &str, value: &[u8]) -> io::Result<()> {
        set_xattr(path, name, value)
    }
}

/// Sets extended attribute `name` on `path` (flags 0: create or replace).
#[cfg(has_xattr)]
pub fn set_xattr(path: &Path, name: &str, value: &[u8]) -> io::Result<()> {
    use std::ffi::CString;

    use nix::errno::Errno;
    use nix::NixPath;

    let name = CString::new(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "attribute name contains a NUL byte",
        )
    })?;
    let ret = path
        .with_nix_path(|cpath| raw_setxattr(cpath.as_ptr(), name.as_ptr(), value))
        .map_err(io::Error::from)?;
    Errno::result(ret).map(drop).map_err(io::Error::from)
}

#[cfg(not(has_xattr))]
pub fn set_xattr(_path: &Path, _name: &str, _value: &[u8]) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "extended attributes are not supported on this platform",
    ))
}

#[cfg(all(has_xattr, any(target_os = "linux", target_os = "android")))]
fn raw_setxattr(path: *const libc::c_char, name: *const libc::c_char, value: &[u8]) -> libc::c_int {
    // SAFETY: both pointers come from live NUL-terminated strings and `value`
    // is valid for `value.len()` bytes for the duration of the call.
    unsafe {
        libc::setxattr(
            path,
            name,
            value.as_ptr() as *const libc::c_void,
            value.len(),
            0,
        )
    }
}

#[cfg(all(has_xattr, any(target_os = "macos", target_os = "ios")))]
fn raw_setxattr(path: *const libc::c_char, name: *const libc::c_char, value: &[u8]) -> libc::c_int {
    // SAFETY: see the Linux variant; position and options are both 0.
    unsafe {
        libc::setxattr(
            path,
            name,
            value.as_ptr() as *const libc::c_void,
            value.len(),
            0,
            0,
        )
    }
}
