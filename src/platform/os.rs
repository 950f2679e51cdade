//! Operating system taxonomy and classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The common names of operating systems.
///
/// The canonical lowercase names (see [`Os::name`]) are used by embedders to
/// locate per-platform native artifacts. Do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    /// MacOS
    Darwin,
    /// FreeBSD
    FreeBsd,
    /// NetBSD
    NetBsd,
    /// OpenBSD
    OpenBsd,
    /// Linux
    Linux,
    /// Solaris (and OpenSolaris)
    Solaris,
    /// Windows
    Windows,
    /// IBM AIX
    Aix,
    /// IBM zSeries Linux
    ZLinux,
    /// Unrecognized operating system
    Unknown,
}

impl Os {
    /// Classify a free-form OS identification string.
    ///
    /// Only the first whitespace-delimited token is considered, lowercased,
    /// and matched by prefix ("Windows 10" and "windows" both classify as
    /// `Windows`). Anything unrecognized is `Unknown`, which is a valid
    /// terminal value, not an error.
    pub fn classify(os_name: &str) -> Self {
        let token = os_name
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();

        if token.starts_with("mac") || token.starts_with("darwin") {
            Os::Darwin
        } else if token.starts_with("linux") {
            Os::Linux
        } else if token.starts_with("sunos") || token.starts_with("solaris") {
            Os::Solaris
        } else if token.starts_with("aix") {
            Os::Aix
        } else if token.starts_with("openbsd") {
            Os::OpenBsd
        } else if token.starts_with("freebsd") {
            Os::FreeBsd
        } else if token.starts_with("windows") {
            Os::Windows
        } else {
            Os::Unknown
        }
    }

    /// Canonical lowercase name of this OS.
    pub fn name(&self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::FreeBsd => "freebsd",
            Os::NetBsd => "netbsd",
            Os::OpenBsd => "openbsd",
            Os::Linux => "linux",
            Os::Solaris => "solaris",
            Os::Windows => "windows",
            Os::Aix => "aix",
            Os::ZLinux => "zlinux",
            Os::Unknown => "unknown",
        }
    }

    /// Check if this OS is Unix-like (everything except Windows).
    pub fn is_unix(&self) -> bool {
        !matches!(self, Os::Windows)
    }

    /// Check if this OS belongs to the BSD family.
    pub fn is_bsd(&self) -> bool {
        matches!(self, Os::FreeBsd | Os::OpenBsd | Os::NetBsd | Os::Darwin)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
