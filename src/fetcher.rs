use crate::config::FetcherConfig;
use crate::downloader;
use crate::errors::{AppError, AppResult};
use crate::extractor;
use crate::models::{FetchedResponse, Outcome, ResponseKind};
use crate::notice;
use tracing::info;

/// Downloads the documentation bundle and unpacks it.
///
/// A run is strictly linear: one request, one classification, then either a
/// notice failure or an extraction followed by the marker check. The two halves are
/// exposed separately ([`Fetcher::fetch`] and [`Fetcher::process`]) so callers can
/// announce the download once the response is known to be an archive.
pub struct Fetcher {
    config: FetcherConfig,
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a fetcher with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the configured URL does not parse.
    pub fn new(config: FetcherConfig) -> AppResult<Self> {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: FetcherConfig, client: reqwest::Client) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Performs the single request against the configured URL.
    pub async fn fetch(&self) -> AppResult<FetchedResponse> {
        downloader::fetch(&self.client, &self.config.url).await
    }

    /// Handles a fetched response: notice failure for JSON, extraction plus marker
    /// check for anything else.
    ///
    /// # Returns
    ///
    /// Returns an [`Outcome`] when the archive was extracted, whether or not the marker
    /// file is present.
    ///
    /// # Errors
    ///
    /// - `UrlExpired` when the server sent a JSON expiration notice
    /// - `UnexpectedJson` when the server sent any other JSON object
    /// - `JsonError`, `ArchiveError` or `IoError` when a step fails
    ///
    /// The output directory is never touched for JSON responses.
    pub async fn process(&self, response: FetchedResponse) -> AppResult<Outcome> {
        let kind = response.kind();
        info!(
            status = response.status,
            kind = kind.display_name(),
            content_type = response.content_type.as_deref().unwrap_or("<none>"),
            "Classified response"
        );

        match kind {
            ResponseKind::Json => Err(AppError::from(notice::classify_notice(&response.body)?)),
            ResponseKind::Binary => {
                let output_dir = &self.config.output_dir;
                let entries_extracted =
                    extractor::extract_archive(response.body, output_dir).await?;

                let marker_path = self.config.marker_path();
                let marker_found = marker_path.exists();
                info!(
                    marker = %marker_path.display(),
                    found = marker_found,
                    "Marker file check"
                );

                Ok(Outcome {
                    output_dir: output_dir.clone(),
                    entries_extracted,
                    marker_file: self.config.marker_file.clone(),
                    marker_found,
                })
            }
        }
    }

    /// Performs one fetch-and-extract run without printing anything.
    pub async fn run(&self) -> AppResult<Outcome> {
        let response = self.fetch().await?;
        self.process(response).await
    }
}
