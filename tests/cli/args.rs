// Integration tests for cli/args.rs — parse loop and validation.
//
// Covers:
//   - every accepted compression spelling reaching Config
//   - -d / -c interaction
//   - thread-count validation (atoi semantics, <= 0 rejected)
//   - the fixed validation order: path, threads, compression
//   - getopt conventions (bundling, attached values, operand permutation)

use std::ffi::OsString;
use std::path::PathBuf;

use btrcompressor::cli::args::{parse_args_from, ParsedArgs};
use btrcompressor::{CompressionSetting, InvalidAlgorithm};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn args(a: &[&str]) -> Vec<OsString> {
    a.iter().map(OsString::from).collect()
}

fn parse(argv: &[&str]) -> ParsedArgs {
    parse_args_from("btrcompressor", &args(argv)).expect("parse should succeed")
}

fn parse_err(argv: &[&str]) -> String {
    parse_args_from("btrcompressor", &args(argv))
        .expect_err("expected parse error")
        .to_string()
}

fn config_err(argv: &[&str]) -> String {
    parse(argv)
        .into_config()
        .expect_err("expected validation error")
        .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compression selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_accepted_token_reaches_config() {
    let cases = [
        ("zlib", CompressionSetting::Zlib),
        ("zstd", CompressionSetting::Zstd),
        ("lzo", CompressionSetting::Lzo),
        ("no", CompressionSetting::Disabled),
        ("none", CompressionSetting::Disabled),
        ("", CompressionSetting::Disabled),
    ];
    for (token, expected) in cases {
        let cfg = parse(&["-c", token, "/data"]).into_config().unwrap();
        assert_eq!(cfg.setting, expected, "token {token:?}");
    }
}

#[test]
fn d_flag_disables() {
    let cfg = parse(&["-d", "/data"]).into_config().unwrap();
    assert_eq!(cfg.setting, CompressionSetting::Disabled);
}

#[test]
fn d_clears_earlier_invalid_token() {
    let cfg = parse(&["-c", "bogus", "-d", "/data"]).into_config().unwrap();
    assert_eq!(cfg.setting, CompressionSetting::Disabled);
}

#[test]
fn bogus_token_is_rejected_with_its_name() {
    assert_eq!(
        config_err(&["-c", "bogus", "/tmp/x"]),
        "invalid compression chosen (bogus)"
    );
}

#[test]
fn uppercase_token_is_rejected() {
    let err = parse(&["-c", "ZSTD", "/tmp/x"]).into_config().unwrap_err();
    assert_eq!(
        err.downcast_ref::<InvalidAlgorithm>(),
        Some(&InvalidAlgorithm::Unknown("ZSTD".into()))
    );
}

#[test]
fn no_selection_is_rejected() {
    let err = parse(&["-v", "/tmp/x"]).into_config().unwrap_err();
    assert_eq!(
        err.downcast_ref::<InvalidAlgorithm>(),
        Some(&InvalidAlgorithm::Unspecified)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Thread count
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn negative_thread_count_is_rejected() {
    assert_eq!(
        config_err(&["-j", "-1", "-c", "zlib", "/tmp/x"]),
        "invalid number of threads (-1)"
    );
}

#[test]
fn non_numeric_thread_count_reads_as_zero() {
    assert_eq!(
        config_err(&["-j", "many", "-c", "zlib", "/tmp/x"]),
        "invalid number of threads (0)"
    );
}

#[test]
fn positive_thread_count_is_kept() {
    let cfg = parse(&["-j", "12", "-c", "zlib", "/tmp/x"]).into_config().unwrap();
    assert_eq!(cfg.threads, 12);
}

#[test]
fn last_thread_flag_wins() {
    let cfg = parse(&["-j", "-1", "-j", "2", "-d", "/tmp/x"]).into_config().unwrap();
    assert_eq!(cfg.threads, 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation order and missing path
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_path_is_reported_first() {
    assert_eq!(config_err(&["-c", "zstd"]), "no file or directory given");
    assert_eq!(config_err(&["-j", "-5"]), "no file or directory given");
}

#[test]
fn thread_check_precedes_compression_check() {
    assert_eq!(
        config_err(&["-j", "0", "/tmp/x"]),
        "invalid number of threads (0)"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// getopt conventions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn path_before_options() {
    let cfg = parse(&["/data", "-c", "lzo"]).into_config().unwrap();
    assert_eq!(cfg.root, PathBuf::from("/data"));
    assert_eq!(cfg.setting, CompressionSetting::Lzo);
}

#[test]
fn option_value_may_look_like_an_option() {
    // getopt hands the next word to -c unconditionally.
    let p = parse(&["-c", "-d", "/data"]);
    assert_eq!(p.compression.as_deref(), Some("-d"));
}

#[test]
fn dash_prefixed_path_after_double_dash() {
    let cfg = parse(&["-d", "--", "-weird-dir"]).into_config().unwrap();
    assert_eq!(cfg.root, PathBuf::from("-weird-dir"));
}

#[test]
fn unknown_flags_fail_during_parse() {
    assert_eq!(parse_err(&["-q", "-d", "/x"]), "invalid option -- 'q'");
    assert_eq!(parse_err(&["-vx"]), "invalid option -- 'x'");
}

#[test]
fn long_options_are_not_supported() {
    assert_eq!(parse_err(&["--verbose"]), "invalid option -- '-'");
}

#[test]
fn trailing_j_without_value_is_error() {
    assert_eq!(parse_err(&["-d", "/x", "-j"]), "option requires an argument -- 'j'");
}

#[test]
fn help_stops_parsing() {
    let p = parse(&["-h", "-x"]);
    assert!(p.exit_early);
}

#[test]
fn version_stops_parsing() {
    let p = parse(&["-V"]);
    assert!(p.exit_early);
}

#[cfg(unix)]
#[test]
fn non_utf8_operand_is_kept_verbatim() {
    use std::os::unix::ffi::OsStringExt;
    let raw = OsString::from_vec(b"/data/\xff".to_vec());
    let p = parse_args_from("btrcompressor", &[OsString::from("-d"), raw.clone()]).unwrap();
    let cfg = p.into_config().unwrap();
    assert_eq!(cfg.root.into_os_string(), raw);
}

// ─────────────────────────────────────────────────────────────────────────────
// Display level
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_raises_display_level() {
    use btrcompressor::cli::constants::{display_level, DISPLAY_LEVEL_VERBOSE};

    parse(&["-d", "/x"]).apply_display_level();
    let before = display_level();
    assert!(before >= 2);

    parse(&["-v", "-d", "/x"]).apply_display_level();
    assert_eq!(display_level(), DISPLAY_LEVEL_VERBOSE);
}
