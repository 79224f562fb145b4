//! Contents manifest line parsing.
//!
//! Each line of a Contents manifest associates one installed file path with a
//! comma-separated list of the packages shipping it:
//!
//! ```text
//! usr/bin/zip                          utils/zip
//! usr/lib/libz.so.1                    libs/zlib1g,libs/zlib1g-dev
//! ```
//!
//! Manifests are large and externally produced; the parser is total. A line
//! that does not fit the expected shape still parses, degenerately, so one
//! anomaly never aborts a multi-hundred-thousand-line run.

use std::borrow::Cow;

/// One parsed manifest line: a file path and the packages referencing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Installed file path. Empty for a blank or whitespace-only line.
    pub path: String,

    /// Packages shipping the file, in manifest order, never deduplicated.
    ///
    /// Always has at least one element. A line with no package field yields
    /// the single empty-string sentinel, mirroring how the upstream format's
    /// quirks surface; callers count it like any other identifier.
    pub packages: Vec<String>,
}

/// Collapse each run of consecutive ASCII spaces into a single space.
fn collapse_spaces(line: &str) -> Cow<'_, str> {
    if !line.contains("  ") {
        return Cow::Borrowed(line);
    }

    let mut collapsed = String::with_capacity(line.len());
    let mut prev_space = false;
    for ch in line.chars() {
        if ch == ' ' {
            if !prev_space {
                collapsed.push(ch);
            }
            prev_space = true;
        } else {
            collapsed.push(ch);
            prev_space = false;
        }
    }
    Cow::Owned(collapsed)
}

/// Parse one manifest line into a [`FileEntry`].
///
/// The line is trimmed, space runs are collapsed, and the result is split at
/// the first remaining space: everything before it is the file path,
/// everything after it is the comma-separated package list. Package names are
/// not trimmed further and duplicates are kept.
///
/// Never fails: a line without a package field (including an empty line)
/// produces the `[""]` sentinel.
pub fn parse_line(line: &str) -> FileEntry {
    let normalized = collapse_spaces(line.trim());

    match normalized.split_once(' ') {
        Some((path, packages)) => FileEntry {
            path: path.to_string(),
            packages: packages.split(',').map(str::to_string).collect(),
        },
        None => FileEntry {
            path: normalized.into_owned(),
            packages: vec![String::new()],
        },
    }
}
