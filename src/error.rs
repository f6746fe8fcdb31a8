//! API Error Taxonomy
//!
//! Nothing here is fatal: authorization failures force a logout, and
//! everything else degrades to a stale-but-displayed view with a toast.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from the backend. The session is cleared by the request
    /// path before this surfaces.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Request never completed (connection refused, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response with the backend's `detail` flattened in.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, message: String) -> ApiError {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Flatten a FastAPI-style error body into one display line.
///
/// `detail` may be a plain string, a validation array of
/// `{loc, msg, ...}` objects, or an arbitrary object.
pub fn detail_message(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback.to_string();
    };
    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(items)) => {
            let lines: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(|loc| loc.get(1))
                        .and_then(Value::as_str);
                    Some(match field {
                        Some(field) => format!("{field}: {msg}"),
                        None => msg.to_string(),
                    })
                })
                .collect();
            if lines.is_empty() {
                fallback.to_string()
            } else {
                lines.join("; ")
            }
        }
        Some(other) => other.to_string(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_classifies_as_unauthorized() {
        let err = ApiError::from_status(401, "ignored".into());
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_other_statuses_keep_message() {
        let err = ApiError::from_status(503, "backend unavailable".into());
        assert_eq!(err.to_string(), "backend unavailable");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_detail_string() {
        let body = r#"{"detail": "Invalid credentials"}"#;
        assert_eq!(detail_message(body, "fallback"), "Invalid credentials");
    }

    #[test]
    fn test_detail_validation_array() {
        let body = r#"{"detail": [
            {"loc": ["body", "age"], "msg": "field required"},
            {"loc": ["body", "symptoms"], "msg": "list cannot be empty"}
        ]}"#;
        assert_eq!(
            detail_message(body, "fallback"),
            "age: field required; symptoms: list cannot be empty"
        );
    }

    #[test]
    fn test_garbage_body_uses_fallback() {
        assert_eq!(detail_message("<html>502</html>", "Bad gateway"), "Bad gateway");
        assert_eq!(detail_message("{}", "Bad gateway"), "Bad gateway");
    }
}
