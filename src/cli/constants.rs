// cli/constants.rs — Program identity, display level and output macros.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "btrcompressor";

/// Option letters that take an argument.
pub const OPTS_WITH_ARG: [char; 2] = ['c', 'j'];

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (warnings); 3 = verbose (`-v`)
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Level set by `-v`.
pub const DISPLAY_LEVEL_VERBOSE: u32 = 3;

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
// Diagnostics and usage text go to stderr. Per-entry progress lines and
// warnings go to stdout so they can be piped separately from errors.
// A closed stream drops the message instead of panicking like `print!`.

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => {{
        use std::io::Write as _;
        let _ = write!(std::io::stdout().lock(), $($arg)*);
    }};
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => {{
        use std::io::Write as _;
        let _ = write!(std::io::stderr().lock(), $($arg)*);
    }};
}

/// Print to stdout when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            $crate::displayout!($($arg)*);
        }
    };
}
