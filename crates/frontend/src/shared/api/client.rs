use super::{ApiError, ApiRequest, ApiTransport, GlooTransport, Method, MultipartPayload, RequestBody};
use crate::shared::api_utils::{api_base, with_query};
use crate::system::auth::credentials::{CredentialProvider, LocalStorageCredentials};
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::envelope::list_from_envelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

/// Parent filters accepted by the list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<EntityId>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }
}

/// Transport plus credentials, passed explicitly to whoever talks to the API
///
/// The token is read from the provider for every request, so signing out
/// takes effect immediately. A missing token aborts with
/// `ApiError::NotAuthenticated` before the transport is touched.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn ApiTransport>,
    credentials: Rc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn ApiTransport>, credentials: Rc<dyn CredentialProvider>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Client for the running console: fetch transport + token from localStorage
    pub fn browser() -> Self {
        Self::new(
            Rc::new(GlooTransport::new(api_base())),
            Rc::new(LocalStorageCredentials),
        )
    }

    fn token(&self) -> Result<String, ApiError> {
        match self.credentials.access_token() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                log::warn!("Request aborted: no access token");
                Err(ApiError::NotAuthenticated)
            }
        }
    }

    async fn send(&self, method: Method, path: String, body: RequestBody) -> Result<Value, ApiError> {
        let token = self.token()?;
        self.transport
            .send(ApiRequest {
                method,
                path,
                token,
                body,
            })
            .await
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::Get, path.to_string(), RequestBody::Empty).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
        self.send(Method::Post, path.to_string(), RequestBody::Json(body)).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
        self.send(Method::Put, path.to_string(), RequestBody::Json(body)).await
    }

    pub async fn post_multipart(&self, path: &str, payload: MultipartPayload) -> Result<Value, ApiError> {
        self.send(Method::Post, path.to_string(), RequestBody::Multipart(payload)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::Delete, path.to_string(), RequestBody::Empty).await
    }

    /// Fetch a collection, resolving the response envelope once here
    pub async fn list<T>(&self, query: &ListQuery) -> Result<Vec<T>, ApiError>
    where
        T: Entity + DeserializeOwned,
    {
        let value = self.get(&with_query(T::endpoint(), query)).await?;
        list_from_envelope(&value, T::plural_key()).map_err(ApiError::Decode)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{anonymous_client, client, MockTransport};
    use super::*;
    use contracts::domain::a005_chapter::aggregate::Chapter;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_attaches_token_and_filters() {
        let transport = Rc::new(MockTransport::default().route(
            "/chapters",
            Ok(json!({ "data": [{"id": 1, "subject_id": 3, "name": "Kinematics"}] })),
        ));
        let api = client(transport.clone());

        let query = ListQuery {
            subject_id: Some(3),
            ..ListQuery::all()
        };
        let chapters: Vec<Chapter> = api.list(&query).await.unwrap();

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name, "Kinematics");
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].path, "/chapters?subject_id=3");
        assert_eq!(requests[0].token, "test-token");
        assert_eq!(requests[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_missing_token_never_reaches_transport() {
        let transport = Rc::new(MockTransport::default());
        let api = anonymous_client(transport.clone());

        let result = api.get("/boards").await;

        assert_eq!(result, Err(ApiError::NotAuthenticated));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_post_json_sends_body() {
        let transport = Rc::new(MockTransport::default().reply(Ok(json!({ "success": true }))));
        let api = client(transport.clone());

        api.post_json("/boards", &json!({ "name": "CBSE" })).await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Post);
        match &requests[0].body {
            RequestBody::Json(body) => assert_eq!(body["name"], "CBSE"),
            _ => panic!("expected a JSON body"),
        }
    }
}
