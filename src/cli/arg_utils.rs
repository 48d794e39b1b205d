// cli/arg_utils.rs — Low-level argument helpers.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Basename of argv[0], or the default program name when it is missing.
pub fn exe_name_from_env() -> String {
    std::env::args_os()
        .next()
        .map(|a| last_name_from_path(&a.to_string_lossy()).to_owned())
        .unwrap_or_else(|| crate::cli::constants::PROGRAM_NAME.to_owned())
}

/// Parses a signed integer the way `atoi(3)` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then digits
/// are consumed until the first non-digit. Anything unparsable yields 0, so
/// `"abc"`, `""` and `"-"` all parse as 0. Values beyond `i64` saturate.
pub fn read_int_from_str(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}
