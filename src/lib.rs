//! Natlib - Platform identity and native shared-library resolution
//!
//! Determines, once per process, which operating system and CPU architecture
//! the process runs on, derives addressing characteristics (32/64-bit width
//! and mask), and resolves generic native-library names to platform-correct
//! file names and on-disk paths.
//!
//! This crate stops at the resolved path: it never loads, links, downloads,
//! or version-manages a library, and performs no I/O beyond read-only
//! file-system existence checks and directory listings. Feeding the result
//! to a loader (`dlopen`, `libloading`, ...) is the caller's business.
//!
//! # Example
//!
//! ```rust
//! use std::path::PathBuf;
//! use natlib::get_platform;
//!
//! let platform = get_platform();
//!
//! // "ssl" → "libssl.so" / "libssl.dylib" / "ssl.dll"
//! let file_name = platform.map_library_name("ssl");
//!
//! // Search a set of directories; a miss degrades to the mapped name.
//! let paths = vec![PathBuf::from("/usr/lib"), PathBuf::from("/usr/local/lib")];
//! let located = platform.locate_library("ssl", &paths);
//! println!("{} -> {}", file_name, located);
//! ```
//!
//! On Linux the locator additionally understands SONAME-style versioned
//! shared objects: given `libfoo.so.5` and `libfoo.so.6` it picks the
//! higher version, even when no unversioned `libfoo.so` symlink exists.

pub mod env;
pub mod error;
pub mod platform;

pub use env::EnvironmentFacts;
pub use error::{PlatformError, PlatformResult};
pub use platform::{get_platform, Cpu, Located, Os, Platform};
