use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::Account;

use super::ApiClient;
use crate::config::{AppConfig, TOKEN_KEY};

/// Who is using the app right now.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// A stored token is being checked against the service.
    #[default]
    Restoring,
    Anonymous,
    Authenticated(Account),
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            SessionState::Authenticated(account) => Some(account),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SessionState::Restoring),
        }
    }

    /// Resolve the session from the token left in local storage.
    pub fn restore(&self, config: &AppConfig) {
        let state = self.state;
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        if token.is_none() {
            log::debug!("no stored session token");
            state.set(SessionState::Anonymous);
            return;
        }

        let client = ApiClient::new(config);
        wasm_bindgen_futures::spawn_local(async move {
            match client.get_account().await {
                Ok(account) => {
                    log::info!("signed in as {}", account.email);
                    state.set(SessionState::Authenticated(account));
                }
                Err(e) => {
                    log::warn!("stored session is no longer valid: {}", e);
                    LocalStorage::delete(TOKEN_KEY);
                    state.set(SessionState::Anonymous);
                }
            }
        });
    }

    pub fn sign_out(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.state.set(SessionState::Anonymous);
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn signal(&self) -> Signal<SessionState> {
        self.state.into()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "u9".to_string(),
            name: "Kai".to_string(),
            email: "kai@example.com".to_string(),
        }
    }

    #[test]
    fn test_default_state_is_restoring() {
        assert_eq!(SessionState::default(), SessionState::Restoring);
        assert!(!SessionState::default().is_logged_in());
    }

    #[test]
    fn test_account_only_when_authenticated() {
        assert_eq!(SessionState::Anonymous.account(), None);
        assert_eq!(SessionState::Restoring.account(), None);

        let state = SessionState::Authenticated(account());
        assert!(state.is_logged_in());
        assert_eq!(state.account().map(|a| a.email.as_str()), Some("kai@example.com"));
    }
}
