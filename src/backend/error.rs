// Backend error classes.
//
// Every failure surfaces as one human-readable message: callers never get
// a partially-populated record list alongside an error.

use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// No response at all: connection refused, DNS failure, timeout.
    #[error("backend unreachable at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// The request couldn't be built or the response body couldn't be decoded.
    #[error("malformed backend exchange for {url}: {reason}")]
    Malformed { url: String, reason: String },
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::Server { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// FastAPI error body: `{"detail": "..."}`. `detail` may also be a list of
/// validation issues, so it is kept as a raw JSON value.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Pull the most useful message out of an error response body.
///
/// Prefers the FastAPI `detail` field; falls back to the raw body, then to
/// the status reason phrase when the body is empty.
pub fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return match parsed.detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}
