use super::transport::interpret_response;
use super::{ApiError, ApiRequest, ApiTransport, Method, RequestBody};
use crate::shared::api_utils::join_url;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

/// Browser transport over `fetch` (gloo-net)
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

#[async_trait(?Send)]
impl ApiTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = join_url(&self.base, &request.path);
        log::debug!("{} {}", request.method.as_str(), url);

        let builder = self
            .builder(request.method, &url)
            .header("Authorization", &format!("Bearer {}", request.token))
            .header("Accept", "application/json");

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(body) => builder.json(body),
            // Content-Type with the multipart boundary is set by the browser
            RequestBody::Multipart(payload) => builder.body(payload.to_form_data()?),
        }
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        interpret_response(status, &text)
    }
}
