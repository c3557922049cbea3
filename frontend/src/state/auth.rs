use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::{AuthResponse, User};
use thiserror::Error;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authenticated session has no user record")]
    MissingUser,
}

/// Read-only view of the authentication state handed to components.
///
/// A user record only exists in the authenticated variant, so rendering code
/// cannot reach an email while signed out.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthSnapshot {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl AuthSnapshot {
    /// Build a snapshot from the store's `{is_auth, user}` pair.
    pub fn from_parts(is_auth: bool, user: Option<User>) -> Result<Self, AuthError> {
        match (is_auth, user) {
            (false, _) => Ok(Self::Anonymous),
            (true, Some(user)) => Ok(Self::Authenticated(user)),
            (true, None) => Err(AuthError::MissingUser),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
}

impl AuthState {
    /// Restore the session persisted in local storage, if any.
    pub fn new() -> Self {
        let stored_token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let stored_user: Option<User> = LocalStorage::get(USER_KEY).ok();

        Self {
            token: create_rw_signal(stored_token),
            user: create_rw_signal(stored_user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn set_auth(&self, response: AuthResponse) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, &response.token) {
            log::warn!("failed to persist auth token: {}", e);
        }
        if let Err(e) = LocalStorage::set(USER_KEY, &response.user) {
            log::warn!("failed to persist user: {}", e);
        }
        self.token.set(Some(response.token));
        self.user.set(Some(response.user));
    }

    pub fn logout(&self) {
        log::info!("logging out");
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        self.token.set(None);
        self.user.set(None);
    }

    /// Current snapshot. A token without a user record is treated as signed out.
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot::from_parts(self.is_authenticated(), self.user.get()).unwrap_or_else(|e| {
            log::warn!("{}", e);
            AuthSnapshot::Anonymous
        })
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(email: &str) -> User {
        User {
            id: Uuid::nil(),
            username: "olena".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_snapshot_anonymous_ignores_user() {
        let snapshot = AuthSnapshot::from_parts(false, Some(user("a@b.com"))).unwrap();
        assert_eq!(snapshot, AuthSnapshot::Anonymous);
        assert!(snapshot.user().is_none());
    }

    #[test]
    fn test_snapshot_authenticated_exposes_user() {
        let snapshot = AuthSnapshot::from_parts(true, Some(user("a@b.com"))).unwrap();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.user().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[test]
    fn test_snapshot_authenticated_without_user_is_error() {
        assert_eq!(
            AuthSnapshot::from_parts(true, None),
            Err(AuthError::MissingUser)
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_auth_then_logout() {
        let runtime = create_runtime();
        let auth = AuthState::new();
        auth.set_auth(AuthResponse {
            token: "token".to_string(),
            user: User {
                id: Uuid::nil(),
                username: "olena".to_string(),
                email: "a@b.com".to_string(),
            },
        });
        assert!(auth.snapshot().is_authenticated());

        let restored = AuthState::new();
        assert_eq!(
            restored.snapshot().user().map(|u| u.email.clone()),
            Some("a@b.com".to_string())
        );

        auth.logout();
        assert_eq!(auth.snapshot(), AuthSnapshot::Anonymous);
        assert!(!AuthState::new().is_authenticated());
        runtime.dispose();
    }
}
