use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::common::EntityId;
use contracts::system::users::{UpdateUserStatusDto, User};

pub async fn fetch_users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    api.list::<User>(&ListQuery::all()).await
}

/// Activate or deactivate an account
pub async fn set_user_active(api: &ApiClient, id: EntityId, is_active: bool) -> Result<(), ApiError> {
    api.put_json(&format!("/users/{}", id), &UpdateUserStatusDto { is_active })
        .await
        .map(|_| ())
}

pub async fn delete_user(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.delete(&format!("/users/{}", id)).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client, MockTransport};
    use crate::shared::api::{Method, RequestBody};
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_fetch_users_accepts_named_key() {
        let transport = Rc::new(MockTransport::default().route(
            "/users",
            Ok(json!({ "users": [{"id": "5", "name": "Asha", "email": "asha@example.com"}] })),
        ));

        let users = fetch_users(&client(transport)).await.unwrap();

        assert_eq!(users[0].id, 5);
        assert!(users[0].is_active);
    }

    #[tokio::test]
    async fn test_deactivate_sends_put_with_flag() {
        let transport = Rc::new(MockTransport::default());

        set_user_active(&client(transport.clone()), 5, false).await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/users/5");
        match &requests[0].body {
            RequestBody::Json(body) => assert_eq!(body, &json!({ "is_active": false })),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_surfaces_server_message() {
        let transport = Rc::new(MockTransport::default().reply(Err(ApiError::Server {
            status: Some(403),
            message: Some("Cannot delete an admin".into()),
        })));

        let err = delete_user(&client(transport.clone()), 1).await.unwrap_err();

        assert_eq!(err.user_message(), "Cannot delete an admin");
        assert_eq!(transport.requests.borrow()[0].method, Method::Delete);
    }
}
