use contracts::shared::envelope::StatusEnvelope;
use serde_json::Value;

/// Fallback text shown when the server gave no usable message
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Errors at the HTTP collaborator boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No access token in the credential store; the request was not sent
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// Non-2xx status or a `success: false` payload
    #[error("Server error (status {status:?}): {message:?}")]
    Server {
        status: Option<u16>,
        message: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a response body, keeping its `message` if any
    pub fn from_body(status: Option<u16>, body: Option<&Value>) -> Self {
        let message = body
            .map(StatusEnvelope::from_value)
            .and_then(|env| env.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Server { status, message }
    }

    /// Text for the notification line
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotAuthenticated => "You are not signed in. Please log in again.".to_string(),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { message: None, .. }
            | ApiError::Transport(_)
            | ApiError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_is_preferred() {
        let body = json!({ "success": false, "message": "Subject already exists" });
        let err = ApiError::from_body(Some(409), Some(&body));
        assert_eq!(err.user_message(), "Subject already exists");
    }

    #[test]
    fn test_fallback_message() {
        let err = ApiError::from_body(Some(500), Some(&json!({ "message": "  " })));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::Transport("offline".into()).user_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::from_body(None, None).user_message(), GENERIC_FAILURE);
    }
}
