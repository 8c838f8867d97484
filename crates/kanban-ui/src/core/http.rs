//! Transport-agnostic pieces of the authenticated API client.
//!
//! # Design
//! - Keep status classification and error extraction pure so they test natively.
//! - Leave redirects and storage side effects to the wasm client.

use serde_json::Value;
use thiserror::Error;

/// Failure modes surfaced by the API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The API rejected the session (HTTP 401).
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response.
        message: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Successful response shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Body should be decoded as JSON.
    Content,
    /// Nothing to decode (204 or empty body).
    NoContent,
}

/// Classify a response by status and body.
///
/// # Errors
/// Returns [`ApiError::Unauthorized`] for 401 and [`ApiError::Status`] for any other
/// non-2xx status.
pub fn classify_response(status: u16, reason: &str, body: &str) -> Result<ResponseKind, ApiError> {
    match status {
        401 => Err(ApiError::Unauthorized),
        204 => Ok(ResponseKind::NoContent),
        200..=299 if body.trim().is_empty() => Ok(ResponseKind::NoContent),
        200..=299 => Ok(ResponseKind::Content),
        _ => Err(ApiError::Status {
            status,
            message: error_message(status, reason, body),
        }),
    }
}

/// Classify a response whose body may have failed to stream.
///
/// Error statuses keep their classification so a 401 still ends the session;
/// a success whose body could not be read is a network failure.
///
/// # Errors
/// Same as [`classify_response`], plus [`ApiError::Network`] for an unreadable
/// success body.
pub fn classify_body(
    status: u16,
    reason: &str,
    body: Result<String, String>,
) -> Result<(ResponseKind, String), ApiError> {
    match body {
        Ok(body) => classify_response(status, reason, &body).map(|kind| (kind, body)),
        Err(err) => {
            classify_response(status, reason, "")?;
            Err(ApiError::Network(format!("response body unreadable: {err}")))
        }
    }
}

/// Best-effort human message for an error response.
#[must_use]
pub fn error_message(status: u16, reason: &str, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["error", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    if reason.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        reason.trim().to_string()
    }
}

/// `Authorization` header value for a stored token; blank tokens are ignored.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_distinct() {
        assert_eq!(
            classify_response(401, "Unauthorized", ""),
            Err(ApiError::Unauthorized)
        );
    }

    #[test]
    fn success_statuses_split_on_body() {
        assert_eq!(
            classify_response(200, "OK", r#"{"id":1}"#),
            Ok(ResponseKind::Content)
        );
        assert_eq!(classify_response(201, "Created", "  "), Ok(ResponseKind::NoContent));
        assert_eq!(
            classify_response(204, "No Content", ""),
            Ok(ResponseKind::NoContent)
        );
    }

    #[test]
    fn unreadable_bodies_are_not_mistaken_for_empty_ones() {
        assert_eq!(
            classify_body(200, "OK", Err("stream reset".to_string())),
            Err(ApiError::Network(
                "response body unreadable: stream reset".to_string()
            ))
        );
        assert_eq!(
            classify_body(401, "Unauthorized", Err("stream reset".to_string())),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(
            classify_body(500, "Internal Server Error", Err("gone".to_string())),
            Err(ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string()
            })
        );
        assert_eq!(
            classify_body(200, "OK", Ok("[]".to_string())),
            Ok((ResponseKind::Content, "[]".to_string()))
        );
    }

    #[test]
    fn error_body_fields_are_preferred() {
        assert_eq!(
            classify_response(422, "Unprocessable", r#"{"error":"title required"}"#),
            Err(ApiError::Status {
                status: 422,
                message: "title required".to_string()
            })
        );
        assert_eq!(
            error_message(500, "Internal", r#"{"message":"boom"}"#),
            "boom"
        );
    }

    #[test]
    fn error_message_falls_back_in_order() {
        assert_eq!(error_message(502, "Bad Gateway", "upstream down"), "upstream down");
        assert_eq!(
            error_message(404, "Not Found", r#"{"detail":"board gone"}"#),
            r#"{"detail":"board gone"}"#
        );
        assert_eq!(error_message(404, "Not Found", r#"{"error":"  "}"#), r#"{"error":"  "}"#);
        assert_eq!(error_message(404, "Not Found", "   "), "Not Found");
        assert_eq!(error_message(503, "", ""), "HTTP 503");
    }

    #[test]
    fn bearer_header_skips_blank_tokens() {
        assert_eq!(bearer_header(Some("abc")), Some("Bearer abc".to_string()));
        assert_eq!(bearer_header(Some("   ")), None);
        assert_eq!(bearer_header(None), None);
    }

    #[test]
    fn errors_render_readably() {
        let err = ApiError::Status {
            status: 409,
            message: "conflict".to_string(),
        };
        assert_eq!(err.to_string(), "request failed (409): conflict");
    }
}
