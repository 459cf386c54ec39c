use crate::constants::{DOCUMENTATION_URL, DOC_DIR, MARKER_FILE};
use crate::errors::AppResult;
use std::path::PathBuf;
use url::Url;

/// Resolved fetcher configuration with all values filled in.
///
/// The binary always runs with [`FetcherConfig::default`], which carries the fixed
/// documentation URL and output directory. The setters exist so callers (and tests)
/// can point the fetcher at another endpoint or destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Endpoint returning either an expiration notice or a ZIP archive
    pub url: String,
    /// Directory the archive is extracted into
    pub output_dir: PathBuf,
    /// File name looked up inside `output_dir` after extraction
    pub marker_file: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url: DOCUMENTATION_URL.to_string(),
            output_dir: PathBuf::from(DOC_DIR),
            marker_file: MARKER_FILE.to_string(),
        }
    }
}

impl FetcherConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Full path of the marker file inside the output directory.
    pub fn marker_path(&self) -> PathBuf {
        self.output_dir.join(&self.marker_file)
    }

    /// Checks that the configured URL is an absolute, parseable URL.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the URL cannot be parsed.
    pub fn validate(&self) -> AppResult<Url> {
        Ok(Url::parse(&self.url)?)
    }
}
