//! Package occurrence counting and top-N selection.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::core::contents::FileEntry;

/// One row of a ranking: a package and the number of files it ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopEntry {
    pub package: String,
    pub files: u64,
}

/// Tally of file occurrences per package, built over one manifest.
///
/// Counting is commutative: the final tally does not depend on the order in
/// which entries are recorded, and two tallies built over disjoint shards of
/// a manifest can be [`merge`](PackageCounts::merge)d into the same result a
/// single pass would produce.
#[derive(Debug, Default)]
pub struct PackageCounts {
    counts: HashMap<String, u64>,
}

impl PackageCounts {
    pub fn new() -> Self {
        PackageCounts::default()
    }

    /// Count every package occurrence on one parsed line.
    ///
    /// Each list position counts separately: a package listed twice on the
    /// same line is incremented twice, and the empty-string sentinel of a
    /// packageless line is counted like any other identifier.
    pub fn record(&mut self, entry: &FileEntry) {
        for package in &entry.packages {
            self.increment(package);
        }
    }

    /// Increment a package's count, initializing it at one if absent.
    fn increment(&mut self, package: &str) {
        match self.counts.get_mut(package) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(package.to_string(), 1);
            }
        }
    }

    /// Fold another tally into this one by summing per-package counts.
    pub fn merge(&mut self, other: PackageCounts) {
        for (package, count) in other.counts {
            *self.counts.entry(package).or_insert(0) += count;
        }
    }

    /// Count recorded for a package, if any.
    pub fn get(&self, package: &str) -> Option<u64> {
        self.counts.get(package).copied()
    }

    /// Number of distinct packages seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The up-to-`n` packages with the largest counts, count-descending.
    ///
    /// Equal counts order ascending lexicographically by package name.
    /// Selection keeps a min-heap of at most `n` candidates, so extracting a
    /// small ranking from a large tally costs O(P log n), not a full sort.
    /// Read-only: repeated calls over an unchanged tally yield identical
    /// results.
    pub fn top(&self, n: usize) -> Vec<TopEntry> {
        if n == 0 {
            return Vec::new();
        }

        // Larger key = better rank: higher count, then lexicographically
        // smaller name. The heap root is the weakest candidate kept.
        let mut heap = BinaryHeap::with_capacity(n.min(self.counts.len()) + 1);
        for (package, &files) in &self.counts {
            heap.push(Reverse((files, Reverse(package.as_str()))));
            if heap.len() > n {
                heap.pop();
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse((files, Reverse(package)))| TopEntry {
                package: package.to_string(),
                files,
            })
            .collect()
    }
}
