//! Mirror source - Contents manifests downloaded from a Debian mirror.
//!
//! The mirror publishes one gzip-compressed manifest per architecture under
//! a dists tree, e.g. `dists/stable/main/Contents-amd64.gz`. The download is
//! staged to a named temporary file in the working directory so the caller
//! can either remove it or keep it under its mirror name once the stream has
//! been consumed.

use flate2::read::GzDecoder;
use url::Url;

use crate::core::Arch;
use crate::sources::{ContentsFile, ContentsSource, FetchError};

/// Default mirror base URL holding the stable Contents manifests.
pub const DEFAULT_MIRROR: &str = "http://ftp.uk.debian.org/debian/dists/stable/main/";

/// A source for manifests hosted on an HTTP mirror.
pub struct MirrorSource {
    /// Mirror base URL
    base: Url,
}

impl MirrorSource {
    /// Create a new mirror source.
    pub fn new(base: Url) -> Self {
        MirrorSource { base }
    }

    /// URL of an architecture's compressed manifest on this mirror.
    pub fn contents_url(&self, arch: Arch) -> Result<Url, FetchError> {
        // A base without a trailing slash would swallow its last path
        // segment on join.
        let mut base = self.base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(&arch.contents_file())
            .map_err(|source| FetchError::MirrorUrl {
                base: self.base.clone(),
                source,
            })
    }
}

impl ContentsSource for MirrorSource {
    fn name(&self) -> &str {
        "mirror"
    }

    fn fetch(&self, arch: Arch) -> Result<ContentsFile, FetchError> {
        let url = self.contents_url(arch)?;

        tracing::info!("Downloading {}", url);

        let mut response =
            reqwest::blocking::get(url.clone()).map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { arch, url });
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        let mut staged = tempfile::Builder::new()
            .prefix(".Contents-")
            .suffix(".gz")
            .tempfile_in(".")
            .map_err(FetchError::Stage)?;

        let bytes = response
            .copy_to(staged.as_file_mut())
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("Downloaded {} bytes to {}", bytes, staged.path().display());

        let compressed = staged.reopen().map_err(FetchError::Stage)?;
        let reader = Box::new(GzDecoder::new(compressed));

        Ok(ContentsFile::new(arch, reader, Some(staged)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(base: &str) -> MirrorSource {
        MirrorSource::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_contents_url_for_default_mirror() {
        let url = mirror(DEFAULT_MIRROR).contents_url(Arch::Amd64).unwrap();
        assert_eq!(
            url.as_str(),
            "http://ftp.uk.debian.org/debian/dists/stable/main/Contents-amd64.gz"
        );
    }

    #[test]
    fn test_contents_url_adds_missing_trailing_slash() {
        let url = mirror("http://deb.example.org/debian/dists/stable/main")
            .contents_url(Arch::S390x)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://deb.example.org/debian/dists/stable/main/Contents-s390x.gz"
        );
    }

    #[test]
    fn test_source_name() {
        assert_eq!(mirror(DEFAULT_MIRROR).name(), "mirror");
    }
}
