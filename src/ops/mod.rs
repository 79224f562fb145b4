//! High-level operations.
//!
//! This module contains the implementation of pkgstat's commands.

pub mod stats;

pub use stats::{format_rankings, package_stats, StatsError, StatsOptions};
