//! Session Store
//!
//! One session store for the whole component tree, provided as context at
//! app start. Two states: anonymous (signal holds `None`) and authenticated
//! (`Some(Session)`). Views read it; only `sign_in`/`sign_out` replace it.

use leptos::*;

use crate::api;
use crate::state::storage;

/// Local storage key for the persisted session payload
pub const SESSION_KEY: &str = "hourglass_session";

/// Session payload returned by the token endpoint.
///
/// Only `access_token` matters to this client; the rest of the payload is
/// whatever the API chose to send.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Session store provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    user: RwSignal<Option<Session>>,
}

/// Provide the session store to the component tree, restoring any session
/// the persisted slot still holds. No network call is involved: a stale,
/// server-side-expired token reads as authenticated until a protected
/// request rejects it.
pub fn provide_session() {
    let user = create_rw_signal(storage::read::<Session>(SESSION_KEY));
    provide_context(SessionState { user });
}

impl SessionState {
    /// Reactive: subscribers re-run whenever the session appears or goes.
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Untracked: callers authorize a single request, they do not subscribe.
    pub fn token(&self) -> Option<String> {
        self.user
            .with_untracked(|user| user.as_ref().map(|session| session.access_token.clone()))
    }

    /// Exchange credentials for a session.
    ///
    /// Any failure - wrong credentials, network down, malformed body - lands
    /// in the same `Err` and leaves the store anonymous with the persisted
    /// slot cleared. The two causes are not distinguishable to callers.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<(), String> {
        match api::sign_in(username, password).await {
            Ok(session) => {
                storage::write(SESSION_KEY, &session);
                self.user.set(Some(session));
                Ok(())
            }
            Err(e) => {
                storage::remove(SESSION_KEY);
                self.user.set(None);
                Err(e)
            }
        }
    }

    /// End the session. The logout endpoint is notified best-effort; the
    /// store goes anonymous and the slot is cleared no matter what it says.
    pub async fn sign_out(&self) {
        api::sign_out().await;
        storage::remove(SESSION_KEY);
        self.user.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_payload_tolerates_missing_token_type() {
        let session: Session = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.token_type, "");
    }

    #[test]
    fn test_session_payload_full() {
        let session: Session =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(session.token_type, "bearer");
    }
}
