//! Generic-to-platform library name mapping.
//!
//! Maps a short generic name like "c" or "ssl" to the file name the platform
//! actually uses (`ssl.dll`, `libssl.dylib`, `libssl.so`). A name that
//! already matches the platform's qualified-name pattern (e.g. `libfoo.so.3`)
//! passes through unchanged, so callers can always opt out of mapping.

use super::Platform;

/// Default Unix convention: prefix `lib`, append `.so`.
pub(super) fn map_unix(platform: &Platform, name: &str) -> String {
    if platform.is_qualified(name) {
        return name.to_string();
    }
    format!("lib{}.so", name)
}

/// Darwin convention: prefix `lib`, append `.dylib`.
pub(super) fn map_darwin(platform: &Platform, name: &str) -> String {
    if platform.is_qualified(name) {
        return name.to_string();
    }
    format!("lib{}.dylib", name)
}

/// Windows convention: append `.dll`, no prefix.
pub(super) fn map_windows(platform: &Platform, name: &str) -> String {
    if platform.is_qualified(name) {
        return name.to_string();
    }
    format!("{}.dll", name)
}

/// Linux convention: as Unix, except that the unversioned `libc.so` is a
/// linker script on common distributions rather than a loadable object, so
/// requests for "c" are pinned to `libc.so.6`.
pub(super) fn map_linux(platform: &Platform, name: &str) -> String {
    if name == "c" || name == "libc.so" {
        return "libc.so.6".to_string();
    }
    map_unix(platform, name)
}
