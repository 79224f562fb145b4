//! Core data structures for pkgstat.
//!
//! This module contains the foundational types used throughout pkgstat:
//! - The accepted architecture set (Arch)
//! - Contents manifest line parsing (FileEntry)
//! - Per-package occurrence counting and ranking (PackageCounts, TopEntry)

pub mod arch;
pub mod contents;
pub mod stats;

pub use arch::{Arch, InvalidArchError};
pub use contents::{parse_line, FileEntry};
pub use stats::{PackageCounts, TopEntry};
