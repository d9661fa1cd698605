use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api::{interpret_response, ApiError};
use crate::shared::api_utils::api_url;

/// Login with email and password
///
/// The only call made without a bearer token, so it bypasses `ApiClient`.
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

    let value = interpret_response(status, &text)?;
    serde_json::from_value::<LoginResponse>(value).map_err(|e| ApiError::Decode(e.to_string()))
}
