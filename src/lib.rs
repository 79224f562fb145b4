//! Pkgstat - Debian Contents manifest statistics
//!
//! This crate provides the core library functionality for pkgstat:
//! downloading an architecture's `Contents-<arch>.gz` manifest from a
//! Debian mirror, parsing it, and ranking packages by file count.

pub mod core;
pub mod ops;
pub mod sources;

pub use core::{
    arch::{Arch, InvalidArchError},
    contents::{parse_line, FileEntry},
    stats::{PackageCounts, TopEntry},
};

pub use ops::stats::{format_rankings, package_stats, StatsError, StatsOptions};
pub use sources::{ContentsFile, ContentsSource, FileSource, MirrorSource};
