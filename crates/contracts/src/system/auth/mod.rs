use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const X_AUTH_TOKEN_HEADER: &str = "x-auth-token";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

impl AdminLoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        if !email.contains('@') {
            return Err("Enter a valid email address".into());
        }
        if self.password.is_empty() {
            return Err("Password is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

/// Which header(s) carry the token.
///
/// Admin routes are not consistent about which one they read, so the
/// default sends both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthHeaderMode {
    XAuthToken,
    Bearer,
    #[default]
    Both,
}

impl AuthHeaderMode {
    /// `x-auth-token`, `bearer` or `both`; anything else falls back to `Both`.
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "x-auth-token" | "x_auth_token" | "xauthtoken" => AuthHeaderMode::XAuthToken,
            "bearer" | "authorization" => AuthHeaderMode::Bearer,
            _ => AuthHeaderMode::Both,
        }
    }
}

pub fn auth_headers(token: &str, mode: AuthHeaderMode) -> Vec<(&'static str, String)> {
    let x_auth = (X_AUTH_TOKEN_HEADER, token.to_string());
    let bearer = (AUTHORIZATION_HEADER, format!("Bearer {}", token));
    match mode {
        AuthHeaderMode::XAuthToken => vec![x_auth],
        AuthHeaderMode::Bearer => vec![bearer],
        AuthHeaderMode::Both => vec![x_auth, bearer],
    }
}

#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

/// `exp` claim of a JWT, if the token is a JWT and carries one.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<ExpiryClaim>(&bytes).ok()?.exp
}

/// Opaque tokens and tokens without `exp` never count as expired here;
/// the server has the final word with a 401.
pub fn is_token_expired(token: &str, now_unix: i64) -> bool {
    token_expiry(token).map_or(false, |exp| exp <= now_unix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(
            auth_headers("t", AuthHeaderMode::XAuthToken),
            vec![("x-auth-token", "t".to_string())]
        );
        assert_eq!(
            auth_headers("t", AuthHeaderMode::Bearer),
            vec![("Authorization", "Bearer t".to_string())]
        );
        assert_eq!(auth_headers("t", AuthHeaderMode::Both).len(), 2);
        assert_eq!(AuthHeaderMode::from_config("Bearer"), AuthHeaderMode::Bearer);
        assert_eq!(AuthHeaderMode::from_config("x-auth-token"), AuthHeaderMode::XAuthToken);
        assert_eq!(AuthHeaderMode::from_config(""), AuthHeaderMode::Both);
    }

    #[test]
    fn test_token_expiry() {
        let token = jwt_with(r#"{"id":"admin","exp":1700000000}"#);
        assert_eq!(token_expiry(&token), Some(1_700_000_000));
        assert!(is_token_expired(&token, 1_700_000_000));
        assert!(!is_token_expired(&token, 1_699_999_999));
    }

    #[test]
    fn test_opaque_tokens_are_not_expired() {
        assert!(!is_token_expired("opaque-session-token", i64::MAX));
        assert!(!is_token_expired(&jwt_with(r#"{"id":"admin"}"#), i64::MAX));
    }

    #[test]
    fn test_login_validation() {
        let ok = AdminLoginRequest {
            email: "admin@agrimart.in".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = AdminLoginRequest {
            email: "admin".into(),
            password: "secret".into(),
        };
        assert!(bad.validate().is_err());

        let no_password = AdminLoginRequest {
            email: "admin@agrimart.in".into(),
            password: String::new(),
        };
        assert_eq!(no_password.validate(), Err("Password is required".to_string()));
    }

    #[test]
    fn test_login_response_aliases() {
        let r: AdminLoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(r.token, "abc");
        let r: AdminLoginResponse = serde_json::from_str(r#"{"accessToken":"xyz"}"#).unwrap();
        assert_eq!(r.token, "xyz");
    }
}
