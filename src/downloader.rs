//! Single-request download of the documentation endpoint.
//!
//! The whole body is read into memory before the caller classifies it, since both the
//! JSON notice and the ZIP archive need the complete payload.

use crate::errors::{AppError, AppResult};
use crate::models::FetchedResponse;
use crate::ui;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

/// Issues one GET request and reads the full response.
///
/// The status code is recorded but not enforced: an error status with a JSON or ZIP
/// body is handled exactly like a success, and only a warning is logged.
///
/// # Errors
///
/// Returns `NetworkError` if the request cannot be sent or the body cannot be read.
pub async fn fetch(client: &reqwest::Client, url: &str) -> AppResult<FetchedResponse> {
    info!(url = url, "Requesting documentation");

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to reach {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        warn!(
            status = status.as_u16(),
            "Server answered with a non-success status, continuing"
        );
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    debug!(
        status = status.as_u16(),
        content_type = content_type.as_deref().unwrap_or("<none>"),
        "Response headers received"
    );

    let content_length = response.content_length();
    let pb = ui::create_download_bar(content_length)?;
    let capacity = content_length
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or_default();
    let mut body = Vec::with_capacity(capacity);

    while let Some(chunk) = response.chunk().await.map_err(|e| {
        pb.abandon();
        AppError::NetworkError(format!("Failed to read response body: {e}"))
    })? {
        body.extend_from_slice(&chunk);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    info!(
        status = status.as_u16(),
        bytes = body.len(),
        "Response received"
    );

    Ok(FetchedResponse {
        status: status.as_u16(),
        content_type,
        body,
    })
}
