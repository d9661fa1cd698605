use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info
            .as_ref()
            .and_then(|u| u.role.as_deref())
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }

    /// Name shown in the header
    pub fn display_name(&self) -> String {
        self.user_info
            .as_ref()
            .map(|u| u.name.clone().unwrap_or_else(|| u.email.clone()))
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from localStorage; the token is validated lazily by the
    // first API call that comes back 401
    let initial = AuthState {
        access_token: storage::get_access_token(),
        user_info: storage::get_user_info(),
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

fn apply_login(response: LoginResponse, email: String, set_auth_state: WriteSignal<AuthState>) {
    storage::save_access_token(&response.access_token);
    let user = response.user.unwrap_or(UserInfo {
        name: None,
        email,
        role: None,
    });
    storage::save_user_info(&user);

    log::info!("Signed in as {}", user.email);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(user),
    });
}

/// Helper: Perform login
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(email.clone(), password).await?;
    apply_login(response, email, set_auth_state);
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: Option<&str>, role: Option<&str>) -> AuthState {
        AuthState {
            access_token: Some("t".into()),
            user_info: Some(UserInfo {
                name: name.map(Into::into),
                email: "staff@school.org".into(),
                role: role.map(Into::into),
            }),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(state(Some("Asha"), None).display_name(), "Asha");
        assert_eq!(state(None, None).display_name(), "staff@school.org");
        assert_eq!(AuthState::default().display_name(), "");
    }

    #[test]
    fn test_admin_role() {
        assert!(state(None, Some("Admin")).is_admin());
        assert!(!state(None, Some("teacher")).is_admin());
        assert!(!state(None, None).is_admin());
        assert!(!AuthState::default().is_authenticated());
    }
}
