//! CPU architecture taxonomy and classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The common names of CPU architectures.
///
/// As with [`super::Os`], the canonical lowercase names (see [`Cpu::name`])
/// are used by embedders to locate per-platform native artifacts. Do not
/// rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cpu {
    /// Intel ia32
    I386,
    /// AMD 64 bit (aka EM64T/X64)
    X86_64,
    /// PowerPC 32 bit
    Ppc,
    /// PowerPC 64 bit
    Ppc64,
    /// Sun SPARC 32 bit
    Sparc,
    /// Sun SPARC 64 bit
    SparcV9,
    /// IBM zSeries S/390 64 bit
    S390X,
    /// Unrecognized CPU
    Unknown,
}

impl Cpu {
    const ALL: [Cpu; 7] = [
        Cpu::I386,
        Cpu::X86_64,
        Cpu::Ppc,
        Cpu::Ppc64,
        Cpu::Sparc,
        Cpu::SparcV9,
        Cpu::S390X,
    ];

    /// Classify a free-form CPU architecture string.
    ///
    /// The common vendor aliases (`amd64`, `i86pc`, `powerpc`, ...) are
    /// special-cased ahead of the generic lookup against canonical names.
    /// Anything unrecognized is `Unknown`.
    pub fn classify(cpu_name: &str) -> Self {
        let arch = cpu_name.to_lowercase();
        match arch.as_str() {
            "x86" | "i386" | "i86pc" => return Cpu::I386,
            "x86_64" | "amd64" => return Cpu::X86_64,
            "ppc" | "powerpc" => return Cpu::Ppc,
            _ => {}
        }
        Cpu::ALL
            .iter()
            .copied()
            .find(|cpu| cpu.name() == arch)
            .unwrap_or(Cpu::Unknown)
    }

    /// Canonical lowercase name of this CPU.
    pub fn name(&self) -> &'static str {
        match self {
            Cpu::I386 => "i386",
            Cpu::X86_64 => "x86_64",
            Cpu::Ppc => "ppc",
            Cpu::Ppc64 => "ppc64",
            Cpu::Sparc => "sparc",
            Cpu::SparcV9 => "sparcv9",
            Cpu::S390X => "s390x",
            Cpu::Unknown => "unknown",
        }
    }

    /// Native address width in bits for this CPU, if known.
    pub fn data_model(&self) -> Option<u32> {
        match self {
            Cpu::I386 | Cpu::Ppc | Cpu::Sparc => Some(32),
            Cpu::X86_64 | Cpu::Ppc64 | Cpu::SparcV9 | Cpu::S390X => Some(64),
            Cpu::Unknown => None,
        }
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
