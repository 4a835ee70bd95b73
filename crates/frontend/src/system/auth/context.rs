use contracts::system::auth::UserProfile;
use leptos::prelude::*;

use super::storage;

/// Session as far as the dashboard cares: who is signed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// Profile of the session user, empty when signed out.
    pub fn profile(&self) -> UserProfile {
        self.user.clone().unwrap_or_default()
    }

    pub fn role(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.role.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::get_user(),
    });

    auth_state.with_untracked(|state| match &state.user {
        Some(user) => log::info!("session restored for {}", user.display_name()),
        None => log::info!("no stored session"),
    });

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

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_state_uses_fallbacks() {
        let state = AuthState::default();
        assert_eq!(state.profile().display_name(), "User");
        assert_eq!(state.role(), None);
    }

    #[test]
    fn test_signed_in_state() {
        let state = AuthState {
            user: Some(UserProfile {
                email: Some("sam@nexus.io".into()),
                role: Some("manager".into()),
                ..Default::default()
            }),
        };
        assert_eq!(state.profile().display_name(), "sam");
        assert_eq!(state.role().as_deref(), Some("manager"));
    }
}
