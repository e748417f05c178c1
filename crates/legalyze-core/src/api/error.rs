use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request rejected: {0}")]
    BadRequest(String),

    #[error("Unauthorized - please log in again")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    /// Pull the human-readable message out of a `{"error": ...}` or
    /// `{"message": ...}` body, falling back to the raw body.
    fn detail(body: &str) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for field in ["error", "message", "detail"] {
                match value.get(field) {
                    Some(serde_json::Value::String(s)) => return s.clone(),
                    Some(serde_json::Value::Array(items)) => {
                        let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                        if !parts.is_empty() {
                            return parts.join(" ");
                        }
                    }
                    _ => {}
                }
            }
        }
        Self::truncate_body(body)
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            400 => ApiError::BadRequest(Self::detail(body)),
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(Self::detail(body)),
            404 => ApiError::NotFound(Self::detail(body)),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(Self::detail(body)),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, Self::truncate_body(body))),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_extracts_error_field() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"error":"Email already registered"}"#);
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Email already registered"));
    }

    #[test]
    fn test_from_status_joins_message_list() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":["This password is too short.","This password is too common."]}"#,
        );
        assert_eq!(
            err.to_string(),
            "Request rejected: This password is too short. This password is too common."
        );
    }

    #[test]
    fn test_from_status_mapping() {
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(matches!(ApiError::from_status(StatusCode::FORBIDDEN, "no"), ApiError::AccessDenied(_)));
        assert!(matches!(ApiError::from_status(StatusCode::NOT_FOUND, "{}"), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""), ApiError::RateLimited));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "<html>"),
            ApiError::ServerError(ref m) if m == "<html>"
        ));
        assert!(matches!(ApiError::from_status(StatusCode::IM_A_TEAPOT, ""), ApiError::InvalidResponse(_)));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH * 2);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let ApiError::ServerError(detail) = err else {
            panic!("expected a server error");
        };
        assert!(detail.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(detail.ends_with("... (truncated, 1000 total bytes)"));
        assert!(detail.len() < body.len());
    }

    #[test]
    fn test_truncation_backs_off_to_char_boundary() {
        // 'é' is two bytes, so byte 500 falls inside a character
        let body = format!("x{}", "é".repeat(MAX_ERROR_BODY_LENGTH));
        let truncated = ApiError::truncate_body(&body);
        let kept = truncated.split("...").next().unwrap_or_default();
        assert_eq!(kept.len(), MAX_ERROR_BODY_LENGTH - 1);
        assert!(kept.chars().skip(1).all(|c| c == 'é'));
        assert!(truncated.ends_with(&format!("(truncated, {} total bytes)", body.len())));
    }
}
