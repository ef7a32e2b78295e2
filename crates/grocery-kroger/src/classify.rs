//! Maps a non-200 response onto a descriptive [`KrogerError::Upstream`].
//!
//! The API uses two error body shapes: the OAuth2 endpoint answers 401 with
//! `{error, error_description}`, while the search endpoints answer 400 and
//! 500 with `{errors: {timestamp, code, reason}}`. The shape is picked from
//! the status code before decoding. A body that fails to decode does not
//! produce a second error; its decode failure becomes the description.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::KrogerError;
use crate::types::{ApiErrorResponse, AuthErrorResponse};

pub(crate) const NOT_FOUND_MESSAGE: &str = "URL endpoint not found";

/// Classifies a non-200 response from its status code and raw body.
#[must_use]
pub fn classify_response(status: StatusCode, body: &str) -> KrogerError {
    let message = match status {
        StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE.to_string(),
        StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR => {
            let description = describe::<ApiErrorResponse>(body, |e| e.errors.reason);
            failed_with(status, &description)
        }
        StatusCode::UNAUTHORIZED => {
            let description = describe::<AuthErrorResponse>(body, |e| e.error_description);
            failed_with(status, &description)
        }
        _ => format!("unknown error with status '{status}'"),
    };

    KrogerError::Upstream {
        status: status.as_u16(),
        message,
    }
}

fn failed_with(status: StatusCode, description: &str) -> String {
    format!("request failed with status '{status}', Error description: {description}")
}

fn describe<T: DeserializeOwned>(body: &str, field: impl FnOnce(T) -> String) -> String {
    serde_json::from_str::<T>(body).map_or_else(
        |e| format!("failed to deserialize JSON response body: {e}"),
        field,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: KrogerError) -> (u16, String) {
        match err {
            KrogerError::Upstream { status, message } => (status, message),
            other => panic!("expected Upstream, got: {other:?}"),
        }
    }

    #[test]
    fn not_found_ignores_body() {
        for body in ["", "not json", r#"{"errors":{"reason":"nope"}}"#] {
            let (status, msg) = message(classify_response(StatusCode::NOT_FOUND, body));
            assert_eq!(status, 404);
            assert_eq!(msg, "URL endpoint not found");
        }
    }

    #[test]
    fn bad_request_uses_nested_reason() {
        let body = r#"{"errors":{"timestamp":1,"code":"Location-4xx-400","reason":"zip is bad"}}"#;
        let (status, msg) = message(classify_response(StatusCode::BAD_REQUEST, body));
        assert_eq!(status, 400);
        assert_eq!(
            msg,
            "request failed with status '400 Bad Request', Error description: zip is bad"
        );
    }

    #[test]
    fn server_error_uses_nested_reason() {
        let body = r#"{"errors":{"reason":"upstream exploded"}}"#;
        let (_, msg) = message(classify_response(StatusCode::INTERNAL_SERVER_ERROR, body));
        assert!(msg.starts_with("request failed with status '500 Internal Server Error'"));
        assert!(msg.ends_with("upstream exploded"));
    }

    #[test]
    fn unauthorized_uses_error_description() {
        let body = r#"{"error":"invalid_client","error_description":"bad creds"}"#;
        let (status, msg) = message(classify_response(StatusCode::UNAUTHORIZED, body));
        assert_eq!(status, 401);
        assert!(msg.contains("bad creds"), "unexpected message: {msg}");
    }

    #[test]
    fn unparsable_body_degrades_to_decode_text() {
        let (_, msg) = message(classify_response(StatusCode::UNAUTHORIZED, "<html>"));
        assert!(msg.starts_with("request failed with status '401 Unauthorized'"));
        assert!(
            msg.contains("failed to deserialize JSON response body"),
            "unexpected message: {msg}"
        );
    }

    #[test]
    fn other_status_is_unknown_error() {
        let (status, msg) = message(classify_response(StatusCode::FORBIDDEN, "{}"));
        assert_eq!(status, 403);
        assert_eq!(msg, "unknown error with status '403 Forbidden'");
    }
}
