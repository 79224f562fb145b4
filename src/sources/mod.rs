//! Manifest sources.
//!
//! Sources are responsible for fetching Contents manifests from various
//! locations (HTTP mirrors, local files) and handing the core a decompressed
//! line stream.

pub mod file;
pub mod mirror;
pub mod source;

pub use file::FileSource;
pub use mirror::{MirrorSource, DEFAULT_MIRROR};
pub use source::{CleanupError, ContentsFile, ContentsSource, FetchError};
