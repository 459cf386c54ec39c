use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Extracts an in-memory ZIP archive into `output_dir`.
///
/// The output directory (and any missing parents) is created first, so it exists even
/// when the payload later turns out not to be a ZIP archive. Extraction itself runs on
/// the blocking pool.
///
/// # Behavior
///
/// - **Relative paths**: every entry lands at `output_dir/<entry path>`.
/// - **Overwrite**: files already present from a previous run are truncated and rewritten.
/// - **Unsafe names**: root, `.` and `..` components are stripped from entry paths,
///   so `../plan.md` lands at `output_dir/plan.md` and `/abs/notes.md` at
///   `output_dir/abs/notes.md`.
/// - **No limits**: entry count and decompressed size are not bounded.
///
/// # Returns
///
/// The number of entries written, counting both files and directories.
///
/// # Errors
///
/// Returns `IoError` if a directory or file cannot be created or written, and
/// `ArchiveError` if the bytes are not a readable ZIP archive.
///
/// # Example
///
/// ```no_run
/// use docfetch::extractor;
/// use std::path::Path;
///
/// # async fn example(bytes: Vec<u8>) -> Result<(), docfetch::errors::AppError> {
/// let written = extractor::extract_archive(bytes, Path::new("documentation")).await?;
/// println!("{written} entries extracted");
/// # Ok(())
/// # }
/// ```
pub async fn extract_archive(bytes: Vec<u8>, output_dir: &Path) -> AppResult<usize> {
    tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    info!(
        output_dir = %output_dir.display(),
        bytes = bytes.len(),
        "Starting extraction"
    );

    let extract_dir = output_dir.to_path_buf();
    let written = tokio::task::spawn_blocking(move || extract_zip_sync(bytes, &extract_dir))
        .await
        .map_err(|e| AppError::IoError(format!("Task join error: {e}")))??;

    info!(entries = written, "Extraction completed");
    Ok(written)
}

/// Synchronous extraction of an in-memory ZIP archive into an existing directory.
pub fn extract_zip_sync(bytes: Vec<u8>, extract_dir: &Path) -> AppResult<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::ArchiveError(format!("Failed to read ZIP archive: {e}")))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(|e| {
            AppError::ArchiveError(format!("Failed to read entry {i} from ZIP archive: {e}"))
        })?;

        // Root, `.` and `..` components are stripped so every entry stays inside
        let out_path = extract_dir.join(file.mangled_name());

        if file.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create directory {}: {}",
                    out_path.display(),
                    e
                ))
            })?;
            written += 1;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut out_file = File::create(&out_path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to create file {}: {}",
                out_path.display(),
                e
            ))
        })?;

        std::io::copy(&mut file, &mut out_file).map_err(|e| {
            AppError::IoError(format!(
                "Failed to write {} from ZIP archive: {}",
                out_path.display(),
                e
            ))
        })?;

        debug!(file = %out_path.display(), size = file.size(), "Extracted entry");
        written += 1;
    }

    Ok(written)
}
