use contracts::shared::api_error::ApiError;
use contracts::system::auth::{AdminLoginRequest, AdminLoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Exchange admin credentials for a token.
pub async fn login(request: &AdminLoginRequest) -> Result<AdminLoginResponse, ApiError> {
    let response = Request::post(&api_url("/admin/login"))
        .json(request)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("login failed with status {}", status);
        // Wrong credentials are a form error here, not a session expiry.
        return Err(match ApiError::from_status(status, &body) {
            ApiError::Unauthorized { status } => ApiError::Server {
                status,
                message: contracts::shared::api_error::extract_server_message(&body)
                    .or_else(|| Some("Invalid email or password".to_string())),
            },
            other => other,
        });
    }

    response
        .json::<AdminLoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
