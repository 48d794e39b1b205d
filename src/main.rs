//! Binary entry point for the `btrcompressor` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`run`] validates it into a [`Config`](btrcompressor::Config), walks the
//!    tree and returns the exit code.
//!
//! Only usage errors change the exit code. Entries whose attribute could not
//! be written are skipped silently (reported with `-v`), and the run still
//! exits 0.

use btrcompressor::cli::arg_utils::exe_name_from_env;
use btrcompressor::cli::args::{parse_args, ParsedArgs};
use btrcompressor::cli::help::{print_error, print_usage};
use btrcompressor::compress_recursively;
use btrcompressor::displaylevel;

/// Validate `args`, walk the tree, and return the process exit code.
fn run(args: ParsedArgs) -> i32 {
    let exe_name = args.exe_name.clone();
    args.apply_display_level();

    for extra in args.extra_operands() {
        displaylevel!(2, "warning: ignoring extra operand {}\n", extra.to_string_lossy());
    }

    let config = match args.into_config() {
        Ok(c) => c,
        Err(e) => {
            print_error(&e);
            print_usage(&exe_name);
            return 1;
        }
    };

    compress_recursively(&config);
    0
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            print_error(&e);
            print_usage(&exe_name_from_env());
            std::process::exit(1);
        }
    };

    // -h / -V already printed their output.
    if args.exit_early {
        std::process::exit(0);
    }

    std::process::exit(run(args));
}
