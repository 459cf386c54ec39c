use crate::constants::EXPIRED_KEYWORD;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value;

/// JSON payload the server sends instead of an archive.
#[derive(Debug, Deserialize)]
struct ExpirationNotice {
    #[serde(default)]
    message: String,
}

/// What a JSON response turned out to say.
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    /// The `message` field mentions expiration; holds the message verbatim
    Expired { message: String },
    /// Any other JSON object
    Other { body: Value },
}

impl From<NoticeKind> for AppError {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Expired { message } => AppError::UrlExpired { message },
            NoticeKind::Other { body } => AppError::UnexpectedJson {
                body: body.to_string(),
            },
        }
    }
}

/// Parses a JSON body and decides whether it is an expiration notice.
///
/// The `message` field defaults to an empty string when absent and is matched against
/// `"expired"` case-insensitively.
///
/// # Errors
///
/// Returns `JsonError` if the body is not valid JSON, is not a JSON object, or carries a
/// `message` that is not a string.
pub fn classify_notice(body: &[u8]) -> AppResult<NoticeKind> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(AppError::JsonError(format!(
            "expected a JSON object, got {value}"
        )));
    }

    let notice = ExpirationNotice::deserialize(&value)?;
    if notice.message.to_lowercase().contains(EXPIRED_KEYWORD) {
        Ok(NoticeKind::Expired {
            message: notice.message,
        })
    } else {
        Ok(NoticeKind::Other { body: value })
    }
}
