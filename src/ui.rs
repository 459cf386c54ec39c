use crate::errors::{AppError, AppResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Creates the progress indicator shown while the response body streams in.
///
/// When the server sends a `Content-Length`, a byte-counting bar is returned; otherwise
/// a spinner that only reports bytes received. Both draw to stderr and stay hidden when
/// stderr is not a terminal, so stdout only carries the status lines.
///
/// # Example
///
/// ```no_run
/// use docfetch::ui;
///
/// # fn main() -> Result<(), docfetch::errors::AppError> {
/// let pb = ui::create_download_bar(Some(1024))?;
/// pb.inc(512);
/// pb.finish_and_clear();
/// # Ok(())
/// # }
/// ```
pub fn create_download_bar(content_length: Option<u64>) -> AppResult<ProgressBar> {
    let pb = match content_length {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} {msg}",
                    )
                    .map_err(|e| {
                        AppError::IoError(format!("Failed to create progress bar template: {e}"))
                    })?
                    .progress_chars("#>-"),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {bytes} {msg}")
                    .map_err(|e| {
                        AppError::IoError(format!("Failed to create progress bar template: {e}"))
                    })?,
            );
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        }
    };
    Ok(pb)
}
