//! Package statistics over one architecture's Contents manifest.
//!
//! Composes a manifest source with the line parser and the aggregator:
//! fetch, stream every line through [`parse_line`], tally occurrences,
//! select the top N, then dispose of the download artifact.

use std::io;

use thiserror::Error;

use crate::core::contents::parse_line;
use crate::core::stats::{PackageCounts, TopEntry};
use crate::core::Arch;
use crate::sources::{CleanupError, ContentsSource, FetchError};

/// Options for a statistics run.
///
/// Configuration flows in here explicitly; the core never reads ambient
/// state.
#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Architecture whose manifest is analyzed
    pub arch: Arch,

    /// How many packages to report
    pub top: usize,

    /// Keep the downloaded manifest instead of deleting it
    pub keep: bool,
}

/// Error from a statistics run.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to read manifest stream")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Cleanup(#[from] CleanupError),
}

/// Rank the packages referencing the most files in `opts.arch`'s manifest.
///
/// A fetch failure aborts the run before any counting happens; malformed
/// manifest lines never fail it. The manifest is consumed as a lazy line
/// stream in a single forward pass, so peak memory stays bounded on
/// multi-hundred-thousand-line inputs.
pub fn package_stats(
    source: &dyn ContentsSource,
    opts: &StatsOptions,
) -> Result<Vec<TopEntry>, StatsError> {
    let mut manifest = source.fetch(opts.arch)?;

    let mut counts = PackageCounts::new();
    let mut lines = 0u64;
    for line in manifest.lines() {
        let line = line.map_err(StatsError::Read)?;
        counts.record(&parse_line(&line));
        lines += 1;
    }

    tracing::debug!(
        "Aggregated {} lines across {} distinct packages",
        lines,
        counts.len()
    );

    let rankings = counts.top(opts.top);

    if let Some(path) = manifest.finish(opts.keep)? {
        tracing::info!("Kept downloaded manifest at {}", path.display());
    }

    Ok(rankings)
}

/// Render rankings as the tool's standard text output.
///
/// One row per package: a right-aligned rank starting at 1, the package name
/// left-justified to a fixed column, a tab, then the file count.
pub fn format_rankings(rankings: &[TopEntry]) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    for (idx, entry) in rankings.iter().enumerate() {
        writeln!(output, "{:>4}. {:<50}\t{}", idx + 1, entry.package, entry.files).unwrap();
    }
    output
}
