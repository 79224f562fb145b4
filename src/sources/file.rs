//! File source - Contents manifests already on the local filesystem.
//!
//! Reads a manifest that was downloaded earlier (or produced by other
//! tooling) instead of contacting a mirror. Files ending in `.gz` are
//! decompressed on the fly; anything else is read as plain text. There is no
//! download artifact to clean up, so the architecture's file stays put.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::core::Arch;
use crate::sources::{ContentsFile, ContentsSource, FetchError};

/// A source for local manifest files.
pub struct FileSource {
    /// Path to the manifest on disk
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    fn is_gzip(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "gz")
    }
}

impl ContentsSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self, arch: Arch) -> Result<ContentsFile, FetchError> {
        tracing::info!("Reading manifest from {}", self.path.display());

        let file = File::open(&self.path).map_err(|source| FetchError::Open {
            path: self.path.clone(),
            source,
        })?;

        let reader: Box<dyn Read> = if Self::is_gzip(&self.path) {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(ContentsFile::new(arch, reader, None))
    }
}
