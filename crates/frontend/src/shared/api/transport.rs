use super::{ApiError, MultipartPayload};
use async_trait::async_trait;
use contracts::shared::envelope::StatusEnvelope;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartPayload),
}

/// One outgoing request; `token` is attached as a bearer credential
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub token: String,
    pub body: RequestBody,
}

/// Seam between the console and the remote API
///
/// Single-threaded (WASM), so futures are not `Send`.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Map a raw response to a value or a server error
///
/// - non-2xx: server error with the body's `message`, if any
/// - 2xx with `success: false`: server error as well
/// - empty 2xx body: `Value::Null`
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    let parsed: Option<Value> = if body.trim().is_empty() {
        None
    } else {
        match serde_json::from_str(body) {
            Ok(v) => Some(v),
            Err(e) if (200..300).contains(&status) => {
                return Err(ApiError::Decode(e.to_string()));
            }
            Err(_) => None,
        }
    };

    if !(200..300).contains(&status) {
        return Err(ApiError::from_body(Some(status), parsed.as_ref()));
    }

    let value = parsed.unwrap_or(Value::Null);
    if StatusEnvelope::from_value(&value).is_failure() {
        return Err(ApiError::from_body(Some(status), Some(&value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_response() {
        let value = interpret_response(200, r#"{"subjects": []}"#).unwrap();
        assert_eq!(value, json!({"subjects": []}));
        assert_eq!(interpret_response(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_non_2xx_keeps_server_message() {
        let err = interpret_response(422, r#"{"message": "Name is taken"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: Some(422),
                message: Some("Name is taken".into())
            }
        );
    }

    #[test]
    fn test_non_json_error_body() {
        let err = interpret_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Server { status: Some(502), message: None });
    }

    #[test]
    fn test_success_false_is_an_error() {
        let err = interpret_response(200, r#"{"success": false, "message": "Invalid file"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "Invalid file");
    }

    #[test]
    fn test_malformed_success_body() {
        let err = interpret_response(200, "{not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
