use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::{AuthResponse, User};

const PROFILE_KEY: &str = "session_profile";

/// Session capability provided via context. Components read the
/// authentication status and profile through this handle; only login,
/// register and logout write to it.
///
/// The profile is meaningful only while a user is present; there is no
/// separate authenticated flag to drift out of sync.
#[derive(Clone)]
pub struct SessionState {
    pub user: RwSignal<Option<User>>,
}

impl SessionState {
    /// Rehydrate from LocalStorage so a page reload keeps the session
    /// until the server-side cookie expires.
    pub fn new() -> Self {
        let stored_user: Option<User> = LocalStorage::get(PROFILE_KEY).ok();

        Self {
            user: create_rw_signal(stored_user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn set_auth(&self, response: AuthResponse) {
        LocalStorage::set(PROFILE_KEY, &response.user).ok();
        self.user.set(Some(response.user));
    }

    /// Replace the session with the unauthenticated state. One signal
    /// assignment, performed within a single UI event.
    pub fn clear(&self) {
        LocalStorage::delete(PROFILE_KEY);
        self.user.set(None);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
