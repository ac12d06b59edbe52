//! Construction-time errors.
//!
//! Once a [`C64Bus`](crate::C64Bus) exists, every read and write succeeds.
//! The only failures are bad inputs at startup.

use std::fmt;

use thiserror::Error;

/// Which ROM image a size check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomKind {
    Basic,
    Char,
    Kernal,
}

impl fmt::Display for RomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomKind::Basic => write!(f, "BASIC"),
            RomKind::Char => write!(f, "Character"),
            RomKind::Kernal => write!(f, "Kernal"),
        }
    }
}

/// A ROM image that cannot be mapped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RomError {
    #[error("{rom} ROM must be {expected} bytes, got {actual}")]
    WrongSize {
        rom: RomKind,
        expected: usize,
        actual: usize,
    },
}

/// A PRG image that cannot be placed in the 64K address space.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrgError {
    #[error("PRG image too short ({len} bytes, need at least 3)")]
    TooShort { len: usize },
    #[error("PRG payload too long ({len} bytes, at most 65536)")]
    TooLong { len: usize },
}

/// Anything that stops the machine from being built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Rom(#[from] RomError),
    #[error(transparent)]
    Prg(#[from] PrgError),
    #[error("invalid patch set: {0}")]
    PatchSet(#[from] serde_json::Error),
}
