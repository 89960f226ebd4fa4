//! Standard API response wrapper (DRY - consistent response format).
//!
//! Every endpoint answers with the same envelope: a `status` label
//! ("success" or "error"), an optional human-readable `message`, and an
//! optional `data` payload. Error bodies never carry `data`. The HTTP status
//! code travels out of band, as the first element of the handler's
//! `(StatusCode, Json<ApiResponse<T>>)` return value.
//!
//! Construction is pure: the same inputs always serialize to the same bytes.

use serde::Serialize;

/// Envelope `status` label for successful responses
const STATUS_SUCCESS: &str = "success";

/// Envelope `status` label for error responses
const STATUS_ERROR: &str = "error";

/// Uniform JSON envelope returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with a message and no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Error response; the payload field is intentionally absent
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: Some(message.into()),
            data: None,
        }
    }
}
