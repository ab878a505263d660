//! Target platform family.
//!
//! The platform only decides the expected binary file name. It is passed in
//! explicitly so lookups never read ambient process state.

use std::fmt;

/// Platform family the executable is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Windows: binaries carry an `.exe` suffix.
    Windows,
    /// Every other platform.
    Unix,
}

impl PlatformFamily {
    /// The family of the platform this crate was compiled for.
    ///
    /// Intended for composition roots; library code takes the family as input.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// File name of the `jarl` executable on this platform family.
    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::Windows => "jarl.exe",
            Self::Unix => "jarl",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::Unix => f.write_str("unix"),
        }
    }
}
