//! Debian machine architectures.
//!
//! The mirror publishes one Contents manifest per architecture; this is the
//! closed set pkgstat accepts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A Debian machine architecture with a published Contents manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    I386,
    Amd64,
    Armel,
    Arm64,
    Armhf,
    Mips,
    Mipsel,
    Mips64el,
    Ppc64el,
    S390x,
}

impl Arch {
    /// Every accepted architecture, in the order they are reported to users.
    pub const ALL: [Arch; 10] = [
        Arch::I386,
        Arch::Amd64,
        Arch::Armel,
        Arch::Arm64,
        Arch::Armhf,
        Arch::Mips,
        Arch::Mipsel,
        Arch::Mips64el,
        Arch::Ppc64el,
        Arch::S390x,
    ];

    /// The architecture name as it appears in mirror paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::I386 => "i386",
            Arch::Amd64 => "amd64",
            Arch::Armel => "armel",
            Arch::Arm64 => "arm64",
            Arch::Armhf => "armhf",
            Arch::Mips => "mips",
            Arch::Mipsel => "mipsel",
            Arch::Mips64el => "mips64el",
            Arch::Ppc64el => "ppc64el",
            Arch::S390x => "s390x",
        }
    }

    /// File name of this architecture's compressed manifest on the mirror.
    pub fn contents_file(&self) -> String {
        format!("Contents-{}.gz", self.as_str())
    }

    /// Comma-separated list of all accepted architecture names.
    pub fn accepted_list() -> String {
        Arch::ALL
            .iter()
            .map(Arch::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an architecture name outside the accepted set.
#[derive(Debug, Clone, Error)]
#[error("unknown architecture `{value}` (accepted: {accepted})")]
pub struct InvalidArchError {
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted names, for the user-facing message.
    pub accepted: String,
}

impl FromStr for Arch {
    type Err = InvalidArchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::ALL
            .iter()
            .find(|arch| arch.as_str() == s)
            .copied()
            .ok_or_else(|| InvalidArchError {
                value: s.to_string(),
                accepted: Arch::accepted_list(),
            })
    }
}
