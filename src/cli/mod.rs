//! Command-line interface for the `btrcompressor` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the display level and the `display!` / `displayout!` / `displaylevel!` output macros. |
//! | [`help`]      | Usage, help, version and error printers. |
//! | [`arg_utils`] | Path basename and `atoi`-style integer parsing. |
//! | [`args`]      | `ParsedArgs`: the getopt-style parse loop and validation into a [`Config`](crate::Config). |
//!
//! Typical call sequence: `parse_args` → `ParsedArgs::into_config` →
//! [`compress_recursively`](crate::compress_recursively).

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod args;
