//! Source trait - common interface for fetching Contents manifests.

use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::Arch;

/// A place a Contents manifest can be fetched from.
pub trait ContentsSource {
    /// Get the source name for display.
    fn name(&self) -> &str;

    /// Fetch the decompressed manifest for an architecture.
    fn fetch(&self, arch: Arch) -> Result<ContentsFile, FetchError>;
}

/// Error while fetching a Contents manifest.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid mirror url `{base}`")]
    MirrorUrl {
        base: url::Url,
        #[source]
        source: url::ParseError,
    },

    #[error("no Contents manifest for `{arch}` at {url}")]
    NotFound { arch: Arch, url: url::Url },

    #[error("mirror returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: url::Url,
    },

    #[error("failed to download {url}")]
    Http {
        url: url::Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to stage download to a temporary file")]
    Stage(#[source] io::Error),

    #[error("cannot read manifest {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error while disposing of a downloaded manifest artifact.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("failed to delete downloaded manifest")]
    Remove(#[source] io::Error),

    #[error("failed to keep downloaded manifest as {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A fetched manifest: a decompressed text stream plus the on-disk download
/// it came from, if any.
///
/// The stream is a single forward pass; exhaustion is normal end-of-input.
/// The download artifact is scoped to this value: dropping it removes the
/// temporary file, and [`finish`](ContentsFile::finish) disposes of it
/// explicitly so removal failures are observable.
pub struct ContentsFile {
    arch: Arch,
    reader: BufReader<Box<dyn Read>>,
    artifact: Option<NamedTempFile>,
}

impl std::fmt::Debug for ContentsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentsFile")
            .field("arch", &self.arch)
            .field("artifact", &self.artifact)
            .finish_non_exhaustive()
    }
}

impl ContentsFile {
    pub(crate) fn new(arch: Arch, reader: Box<dyn Read>, artifact: Option<NamedTempFile>) -> Self {
        ContentsFile {
            arch,
            reader: BufReader::new(reader),
            artifact,
        }
    }

    /// The architecture this manifest was fetched for.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Lazily iterate over the manifest's text lines.
    pub fn lines(&mut self) -> impl Iterator<Item = io::Result<String>> + '_ {
        (&mut self.reader).lines()
    }

    /// Dispose of the download artifact.
    ///
    /// With `keep`, the compressed download is moved to
    /// `Contents-<arch>.gz` in the working directory and its path returned;
    /// otherwise it is removed. Sources without an on-disk artifact (local
    /// inputs) return `Ok(None)` either way.
    pub fn finish(self, keep: bool) -> Result<Option<PathBuf>, CleanupError> {
        let Some(artifact) = self.artifact else {
            return Ok(None);
        };

        if keep {
            let dest = PathBuf::from(self.arch.contents_file());
            artifact
                .persist(&dest)
                .map_err(|err| CleanupError::Persist {
                    path: dest.clone(),
                    source: err.error,
                })?;
            Ok(Some(dest))
        } else {
            artifact.close().map_err(CleanupError::Remove)?;
            Ok(None)
        }
    }
}
