// Integration tests for cli/arg_utils.rs — basename and atoi-style parsing
// as used by the `-j` thread count.

use btrcompressor::cli::arg_utils::{last_name_from_path, read_int_from_str};

#[test]
fn basename_of_relative_invocation() {
    assert_eq!(last_name_from_path("./target/debug/btrcompressor"), "btrcompressor");
}

#[test]
fn basename_of_trailing_slash_is_empty() {
    assert_eq!(last_name_from_path("dir/"), "");
}

#[test]
fn thread_counts_read_like_atoi() {
    let cases = [
        ("1", 1),
        ("16", 16),
        ("0", 0),
        ("-1", -1),
        ("-40", -40),
        ("four", 0),
        ("2x", 2),
        (" \t5", 5),
    ];
    for (input, expected) in cases {
        assert_eq!(read_int_from_str(input), expected, "input {input:?}");
    }
}
