//! Platform identity and native-library resolution.
//!
//! Classifies the running process's operating system and CPU into closed
//! taxonomies, derives the native address width and mask, and resolves
//! generic library names ("c", "ssl") to the file names and paths the
//! platform actually uses.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentFacts (raw OS/CPU strings, width hint)
//!       │
//!       ▼
//! Identity Resolver (Os/Cpu classification, width + mask)
//!       │
//!       ▼
//! Name Mapper ("ssl" → libssl.so / libssl.dylib / ssl.dll)
//!       │
//!       ▼
//! Library Locator (ordered directory search, versioned .so ranking)
//! ```
//!
//! Per-OS behavioral divergence lives in a small strategy table of function
//! pairs (name mapper, locator) selected once when the identity is
//! resolved; there is no per-call OS dispatch.
//!
//! # Example
//!
//! ```rust
//! use natlib::get_platform;
//!
//! let platform = get_platform();
//! let mapped = platform.map_library_name("ssl");
//! assert!(mapped.contains("ssl"));
//! ```

mod cpu;
mod locate;
mod naming;
mod os;


pub use cpu::Cpu;
pub use locate::Located;
pub use os::Os;

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::env::EnvironmentFacts;
use crate::error::{PlatformError, PlatformResult};

/// Per-OS behavior pair, selected once at identity resolution.
#[derive(Debug)]
struct Strategy {
    map_name: fn(&Platform, &str) -> String,
    locate: fn(&Platform, &str, &[PathBuf]) -> Located,
}

static UNIX_STRATEGY: Strategy = Strategy {
    map_name: naming::map_unix,
    locate: locate::locate_first_hit,
};

static DARWIN_STRATEGY: Strategy = Strategy {
    map_name: naming::map_darwin,
    locate: locate::locate_first_hit,
};

static WINDOWS_STRATEGY: Strategy = Strategy {
    map_name: naming::map_windows,
    locate: locate::locate_first_hit,
};

static LINUX_STRATEGY: Strategy = Strategy {
    map_name: naming::map_linux,
    locate: locate::locate_versioned_so,
};

fn strategy_for(os: Os) -> &'static Strategy {
    match os {
        Os::Linux => &LINUX_STRATEGY,
        Os::Darwin => &DARWIN_STRATEGY,
        Os::Windows => &WINDOWS_STRATEGY,
        // Unknown included: unrecognized platforms get the conservative
        // Unix conventions rather than a failure.
        _ => &UNIX_STRATEGY,
    }
}

/// The resolved identity of the platform this process runs on.
///
/// Immutable once constructed. Process-wide access goes through
/// [`get_platform`], which resolves the identity exactly once.
#[derive(Debug)]
pub struct Platform {
    os: Os,
    cpu: Cpu,
    address_size: u32,
    address_mask: u64,
    runtime_major: Option<u32>,
    lib_pattern: Regex,
    strategy: &'static Strategy,
}

static PLATFORM: Lazy<Platform> = Lazy::new(|| {
    match Platform::from_facts(&EnvironmentFacts::from_host()) {
        Ok(platform) => platform,
        // The process cannot do native-library work without an address
        // width; this is the single fatal initialization case.
        Err(err) => panic!("platform identity resolution failed: {}", err),
    }
});

/// Get the process-wide platform identity.
///
/// Resolved lazily on first access, thread-safe, cached for the process
/// lifetime. Panics only if the native address width cannot be determined;
/// on real hosts [`EnvironmentFacts::from_host`] always carries the
/// compile-time pointer width, so that path is unreachable in practice.
pub fn get_platform() -> &'static Platform {
    &PLATFORM
}

impl Platform {
    /// Resolve a platform identity from raw environment facts.
    ///
    /// Unrecognized OS or CPU strings classify to their `Unknown` terminal
    /// values; the only error is an address width that can be neither taken
    /// from the facts' 32/64 hint nor derived from the CPU.
    pub fn from_facts(facts: &EnvironmentFacts) -> PlatformResult<Self> {
        let os = Os::classify(&facts.os_name);
        let cpu = Cpu::classify(&facts.cpu_name);

        let address_size = match facts.data_model {
            Some(bits @ (32 | 64)) => bits,
            _ => cpu
                .data_model()
                .ok_or_else(|| PlatformError::UnknownAddressSize(facts.cpu_name.clone()))?,
        };
        let address_mask = if address_size == 32 {
            0xFFFF_FFFF
        } else {
            u64::MAX
        };

        Ok(Self {
            os,
            cpu,
            address_size,
            address_mask,
            runtime_major: facts.runtime_version.as_deref().and_then(parse_major),
            lib_pattern: qualified_pattern(os),
            strategy: strategy_for(os),
        })
    }

    /// The resolved operating system.
    pub fn os(&self) -> Os {
        self.os
    }

    /// The resolved CPU architecture.
    pub fn cpu(&self) -> Cpu {
        self.cpu
    }

    /// Native address width in bits: always 32 or 64.
    pub fn address_size(&self) -> u32 {
        self.address_size
    }

    /// Bit mask matching the address width: `0xFFFF_FFFF` for 32-bit,
    /// all-ones for 64-bit.
    pub fn address_mask(&self) -> u64 {
        self.address_mask
    }

    /// Major version of the hosting runtime, when the embedder supplied a
    /// version string. Reporting only; never used in resolution.
    pub fn runtime_major(&self) -> Option<u32> {
        self.runtime_major
    }

    /// Check if the platform is Unix-like (everything except Windows).
    pub fn is_unix(&self) -> bool {
        self.os.is_unix()
    }

    /// Check if the platform belongs to the BSD family.
    pub fn is_bsd(&self) -> bool {
        self.os.is_bsd()
    }

    /// Identity string in `<cpu>-<os>` form, e.g. `x86_64-linux`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.cpu, self.os)
    }

    /// Check if `name` is already a fully-qualified library file name for
    /// this platform (e.g. `libfoo.so.3` on Linux, `foo.dll` on Windows).
    pub fn is_qualified(&self, name: &str) -> bool {
        self.lib_pattern.is_match(name)
    }

    /// Map a generic library name (e.g. "c") to the platform-specific file
    /// name. Already-qualified names pass through unchanged. Pure; never
    /// fails.
    pub fn map_library_name(&self, name: &str) -> String {
        (self.strategy.map_name)(self, name)
    }

    /// Search `search_paths` in order for the library with the given
    /// generic name.
    ///
    /// Returns the absolute path of a match on disk, or the mapped file
    /// name as a fallback for a system-level loader when nothing matched.
    /// Never a hard error.
    pub fn locate_library(&self, name: &str, search_paths: &[PathBuf]) -> Located {
        (self.strategy.locate)(self, name, search_paths)
    }
}

/// Compile the per-OS pattern recognizing already-qualified library names.
fn qualified_pattern(os: Os) -> Regex {
    let pattern = match os {
        Os::Windows => r".*\.dll$",
        Os::Darwin => r"lib.*\.(dylib|jnilib)$",
        _ => r"lib.*\.so.*$",
    };
    Regex::new(pattern).expect("known library name patterns are valid")
}

/// Extract the major component of a runtime version string, honoring the
/// legacy `1.x` convention (`"1.8.0"` → 8, `"17.0.2"` → 17).
fn parse_major(version: &str) -> Option<u32> {
    let mut components = version.split('.').map(|part| {
        part.chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse::<u32>()
            .ok()
    });
    let first = components.next()??;
    if first == 1 {
        components.next().flatten()
    } else {
        Some(first)
    }
}
