use crate::constants::JSON_CONTENT_TYPE;
use std::path::PathBuf;

/// How a response body is handled, decided from its `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Structured JSON, expected to carry an expiration notice
    Json,
    /// Anything else, expected to be a ZIP archive
    Binary,
}

impl ResponseKind {
    /// Classifies a response by its content type.
    ///
    /// Only a case-sensitive substring match on `application/json` yields [`ResponseKind::Json`];
    /// every other value, including a missing header, is [`ResponseKind::Binary`].
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(value) if value.contains(JSON_CONTENT_TYPE) => Self::Json,
            _ => Self::Binary,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "binary",
        }
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn kind(&self) -> ResponseKind {
        ResponseKind::from_content_type(self.content_type.as_deref())
    }
}

/// Result of a successful extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Directory the archive was extracted into
    pub output_dir: PathBuf,
    /// Number of archive entries written (files and directories)
    pub entries_extracted: usize,
    /// Name of the marker file that was looked up
    pub marker_file: String,
    /// Whether the marker file exists after extraction
    pub marker_found: bool,
}
