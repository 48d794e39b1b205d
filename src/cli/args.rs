//! Command-line argument parsing for `btrcompressor`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args_os()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//!
//! Parsing follows getopt(3) with the option string `c:dj:vhV`:
//! - short flags may be bundled (`-vd`);
//! - `-c` and `-j` take the rest of the word (`-czstd`) or the next word,
//!   whatever it looks like (`-c -d` sets the compression to `-d`);
//! - operands may appear before, between or after options;
//! - `--` ends option processing and a lone `-` is an operand.
//!
//! Validation is a separate step ([`ParsedArgs::into_config`]) so that the
//! checks run in a fixed order after every option has been seen: path, then
//! thread count, then compression.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail};

use crate::cli::arg_utils::{exe_name_from_env, read_int_from_str};
use crate::cli::constants::{set_display_level, DISPLAY_LEVEL_VERBOSE, OPTS_WITH_ARG};
use crate::cli::help::{print_help, print_version};
use crate::compression::CompressionSetting;
use crate::config::{Config, THREADS_DEFAULT};
use crate::displaylevel;
use crate::error::InvalidAlgorithm;

/// Everything collected from the command line, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Last compression token seen. `-d` stores the empty token; `None` means
    /// neither `-c` nor `-d` was given.
    pub compression: Option<String>,
    /// Value of the last `-j`, as `atoi` would read it.
    pub threads: i64,
    /// `-v` was given.
    pub verbose: bool,
    /// Non-option arguments in order. Only the first is walked.
    pub operands: Vec<OsString>,
    /// `-h` or `-V` was handled; the caller should exit 0.
    pub exit_early: bool,
    /// Program name (argv[0] basename), used by help functions.
    pub exe_name: String,
}

impl ParsedArgs {
    fn new(exe_name: &str) -> Self {
        ParsedArgs {
            compression: None,
            threads: i64::from(THREADS_DEFAULT),
            verbose: false,
            operands: Vec::new(),
            exit_early: false,
            exe_name: exe_name.to_owned(),
        }
    }

    /// Raises the process display level to verbose when `-v` was given.
    pub fn apply_display_level(&self) {
        if self.verbose {
            set_display_level(DISPLAY_LEVEL_VERBOSE);
        }
    }

    /// Operands after the first; they are not walked.
    pub fn extra_operands(&self) -> &[OsString] {
        self.operands.get(1..).unwrap_or(&[])
    }

    /// Validates the parsed options into a run configuration.
    ///
    /// Fails, in this order, when no path was given, when the thread count is
    /// not positive, and when the compression choice is missing or unknown.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let root = self
            .operands
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no file or directory given"))?;

        if self.threads <= 0 {
            bail!("invalid number of threads ({})", self.threads);
        }

        let setting = match self.compression {
            Some(token) => CompressionSetting::normalize(&token)?,
            None => return Err(InvalidAlgorithm::Unspecified.into()),
        };

        Ok(Config {
            root: PathBuf::from(root),
            setting,
            threads: u32::try_from(self.threads).unwrap_or(u32::MAX),
            verbose: self.verbose,
        })
    }
}

/// Parse `std::env::args_os()`, taking the program name from argv[0].
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();
    parse_args_from(&exe_name_from_env(), &argv)
}

/// Parse an explicit argument list. `argv` excludes the program name.
///
/// Each `-j` prints the "threading is not implemented" warning as it is
/// parsed, even if a later check rejects the command line.
pub fn parse_args_from(exe_name: &str, argv: &[OsString]) -> anyhow::Result<ParsedArgs> {
    let mut parsed = ParsedArgs::new(exe_name);
    let mut all_arguments_are_operands = false;

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let raw = &argv[arg_idx];
        arg_idx += 1;

        // Non-UTF-8 words cannot spell an option; they can only be paths.
        let Some(argument) = raw.to_str() else {
            parsed.operands.push(raw.clone());
            continue;
        };

        if all_arguments_are_operands || !argument.starts_with('-') || argument == "-" {
            parsed.operands.push(raw.clone());
            continue;
        }
        if argument == "--" {
            all_arguments_are_operands = true;
            continue;
        }

        let flags = &argument[1..];
        for (pos, flag) in flags.char_indices() {
            if OPTS_WITH_ARG.contains(&flag) {
                let attached = &flags[pos + flag.len_utf8()..];
                let value = if !attached.is_empty() {
                    attached.to_owned()
                } else if arg_idx < argv.len() {
                    arg_idx += 1;
                    argv[arg_idx - 1].to_string_lossy().into_owned()
                } else {
                    bail!("option requires an argument -- '{}'", flag);
                };

                if flag == 'c' {
                    parsed.compression = Some(value);
                } else {
                    parsed.threads = read_int_from_str(&value);
                    displaylevel!(
                        2,
                        "warning: threading is not implemented yet. {} will run with 1 thread.\n",
                        exe_name
                    );
                }
                // The argument consumed the rest of this word.
                break;
            }

            match flag {
                'd' => parsed.compression = Some(String::new()),
                'v' => parsed.verbose = true,
                'h' => {
                    print_help(exe_name);
                    parsed.exit_early = true;
                    return Ok(parsed);
                }
                'V' => {
                    print_version();
                    parsed.exit_early = true;
                    return Ok(parsed);
                }
                other => bail!("invalid option -- '{}'", other),
            }
        }
    }

    Ok(parsed)
}
