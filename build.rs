// build.rs — Platform detection for btrcompressor.
//
// Emits `cargo:rustc-cfg=has_xattr` on targets whose libc exposes
// setxattr(2). Elsewhere `SystemXattr` reports every write as unsupported and
// the walk still runs to completion.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let xattr_targets = ["linux", "android", "macos", "ios"];
    if xattr_targets.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=has_xattr");
    }
}
