//! Credential providers
//!
//! The token is set at sign-in and cleared at sign-out; components never read
//! localStorage themselves but receive a provider through `ApiClient`.

use super::storage;

pub trait CredentialProvider {
    /// Current bearer token, `None` when signed out
    fn access_token(&self) -> Option<String>;
}

/// Reads the token saved by the login page
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn access_token(&self) -> Option<String> {
        storage::get_access_token()
    }
}

/// Fixed token, used by tests
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
