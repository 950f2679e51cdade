//! Raw environment facts consumed by identity resolution.
//!
//! The resolver treats its inputs as untrusted free text supplied by the
//! hosting environment. They are gathered once, here, and never re-queried;
//! everything derived from them lives in [`crate::platform::Platform`].

/// The raw inputs to platform identity resolution.
///
/// Embedders that know more than the host process does (for example a VM
/// host with its own version string, or a cross-inspection tool examining a
/// foreign sysroot) can construct these directly and hand them to
/// [`crate::platform::Platform::from_facts`].
#[derive(Debug, Clone)]
pub struct EnvironmentFacts {
    /// Free-form OS identification string, e.g. "Mac OS X" or "linux".
    pub os_name: String,
    /// Free-form CPU architecture string, e.g. "amd64" or "x86_64".
    pub cpu_name: String,
    /// Explicit address-model declaration. Only the exact values 32 and 64
    /// are honored; anything else falls back to CPU-derived width.
    pub data_model: Option<u32>,
    /// Runtime version string of the hosting environment, if it has one.
    /// Used only to report a major version number, never for resolution.
    pub runtime_version: Option<String>,
}

impl EnvironmentFacts {
    /// Gather facts from the current host process.
    ///
    /// The OS and CPU strings come from `std::env::consts`; the address
    /// model comes from the pointer width this binary was compiled for, so
    /// on a real host the width hint is always present. The runtime version
    /// is left unset; hosts that have one supply it themselves.
    pub fn from_host() -> Self {
        let data_model = if cfg!(target_pointer_width = "64") {
            Some(64)
        } else if cfg!(target_pointer_width = "32") {
            Some(32)
        } else {
            None
        };

        Self {
            os_name: std::env::consts::OS.to_string(),
            cpu_name: std::env::consts::ARCH.to_string(),
            data_model,
            runtime_version: None,
        }
    }
}
