use thiserror::Error;

/// Every way a documentation fetch can fail.
///
/// All variants share the same exit status; the variant only decides how the
/// failure is rendered for the user (see [`crate::report`]).
#[derive(Debug, Error)]
pub enum AppError {
    /// Network request failed or the response body could not be read
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Body advertised as JSON could not be parsed
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Body could not be read as a ZIP archive
    #[error("Archive error: {0}")]
    ArchiveError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// The server answered with an expiration notice
    #[error("Download URL expired: {message}")]
    UrlExpired { message: String },
    /// The server answered with JSON that is not an expiration notice
    #[error("Unexpected JSON response: {body}")]
    UnexpectedJson { body: String },
}

impl AppError {
    /// Process exit status for this failure. Every failure kind maps to `1`.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::ArchiveError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
