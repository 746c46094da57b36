//! Error taxonomy for calls to the admin REST API.
//!
//! Every network-calling function in the frontend returns `Result<_, ApiError>`.
//! Pages only need two questions answered: is this an auth failure (force logout)
//! and what text should the user see.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No token in storage, or the stored token has expired.
    #[error("Not signed in. Please log in.")]
    MissingToken,

    /// The server rejected the token (401/403).
    #[error("Session expired or access denied (status {status}). Please log in again.")]
    Unauthorized { status: u16 },

    /// Any other non-2xx response.
    #[error("{}", server_text(.status, .message))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Refused before sending: the form did not produce a valid body.
    #[error("{0}")]
    Invalid(String),
}

fn server_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Request failed with status {}", status),
    }
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status },
            _ => ApiError::Server {
                status,
                message: extract_server_message(body),
            },
        }
    }

    /// Auth failures force a logout instead of being retried.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Unauthorized { .. })
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Pull a human readable message out of an error body.
///
/// Accepts a bare JSON string, `{"message": ..}`, `{"msg": ..}`, `{"error": ..}` and
/// `{"error": {"message": ..}}`. Short plain-text bodies are used as is,
/// HTML error pages are ignored.
pub fn extract_server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let serde_json::Value::String(s) = &value {
            let s = s.trim();
            return (!s.is_empty()).then(|| s.to_string());
        }
        for key in ["message", "msg", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
                    return Some(s.trim().to_string())
                }
                Some(serde_json::Value::Object(inner)) => {
                    if let Some(serde_json::Value::String(s)) = inner.get("message") {
                        if !s.trim().is_empty() {
                            return Some(s.trim().to_string());
                        }
                    }
                }
                _ => {}
            }
        }
        return None;
    }

    if trimmed.starts_with('<') || trimmed.len() > 200 {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        assert_eq!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized { status: 401 }
        );
        assert!(ApiError::from_status(403, "{\"message\":\"forbidden\"}").is_auth());
        assert!(ApiError::MissingToken.is_auth());
        assert!(!ApiError::from_status(500, "").is_auth());
        assert!(!ApiError::Network("offline".into()).is_auth());
        assert_eq!(
            ApiError::Invalid("Code is required".into()).user_message(),
            "Code is required"
        );
    }

    #[test]
    fn test_server_message_verbatim() {
        let err = ApiError::from_status(400, r#"{"message":"Promo code already exists"}"#);
        assert_eq!(err.user_message(), "Promo code already exists");

        let err = ApiError::from_status(422, r#"{"error":{"message":"Invalid email"}}"#);
        assert_eq!(err.user_message(), "Invalid email");

        let err = ApiError::from_status(400, r#"{"msg":"Bad input"}"#);
        assert_eq!(err.user_message(), "Bad input");
    }

    #[test]
    fn test_generic_message_when_body_has_none() {
        let err = ApiError::from_status(500, "<html><body>oops</body></html>");
        assert_eq!(err.user_message(), "Request failed with status 500");

        let err = ApiError::from_status(502, r#"{"ok":false}"#);
        assert_eq!(err.user_message(), "Request failed with status 502");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(
            extract_server_message("  Order not found "),
            Some("Order not found".to_string())
        );
        assert_eq!(extract_server_message(""), None);
    }

    #[test]
    fn test_json_string_body() {
        assert_eq!(
            extract_server_message(r#""Order not found""#),
            Some("Order not found".to_string())
        );
        assert_eq!(extract_server_message(r#""  ""#), None);

        let err = ApiError::from_status(404, r#""Order not found""#);
        assert_eq!(err.user_message(), "Order not found");
    }
}
