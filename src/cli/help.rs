// cli/help.rs — Usage, help, version and error printers.

use std::io::{self, Write};

use crate::cli::constants::{display_level, PROGRAM_NAME};
use crate::{display, displayout};
use crate::compression::CompressionSetting;

/// Writes the usage block for `program` to `out`.
pub fn write_usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    let algorithms: Vec<&str> = CompressionSetting::ALL
        .iter()
        .filter(|s| !s.is_disabled())
        .map(|s| s.as_str())
        .collect();
    writeln!(
        out,
        "Usage: {} [-v] [-j <threads>] <-c compression | -d> <file or directory>",
        program
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "       -c <compression> ... choose the compression to set ({})",
        algorithms.join(",")
    )?;
    writeln!(out, "       -d               ... disable compression")?;
    writeln!(out, "       -j <threads>     ... number of threads to use (not implemented)")?;
    writeln!(out, "       -v               ... verbose output")?;
    writeln!(out, "       -h               ... display this help and exit")?;
    writeln!(out, "       -V               ... display version and exit")?;
    writeln!(out)
}

/// Print usage to stderr.
pub fn print_usage(program: &str) {
    let _ = write_usage(&mut io::stderr().lock(), program);
}

/// Print usage to stdout, for `-h`.
pub fn print_help(program: &str) {
    let _ = write_usage(&mut io::stdout().lock(), program);
}

/// Print the version banner to stdout, for `-V`.
pub fn print_version() {
    displayout!("{} v{}\n", PROGRAM_NAME, crate::version_string());
}

/// Print `error: <msg>` followed by a blank line to stderr (display level 1).
pub fn print_error(msg: &dyn std::fmt::Display) {
    if display_level() >= 1 {
        display!("error: {}\n\n", msg);
    }
}
